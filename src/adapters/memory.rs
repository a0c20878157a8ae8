use crate::core::render::View;
use crate::domain::ports::Surface;

/// 保留所有收到的畫面，供檢查使用
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    views: Vec<View>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn last(&self) -> Option<&View> {
        self.views.last()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, view: &View) {
        self.views.push(view.clone());
    }
}
