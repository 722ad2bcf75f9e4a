//! Shared test doubles for the pipeline integration tests.

use std::sync::Mutex;

use miapp_core::deeplink::{DetailBlock, DETAIL_SURFACE_ID};
use miapp_core::host::{DetailSurface, Presenter};

/// Presenter that records every toast and rendered block.
#[derive(Default)]
pub struct RecordingPresenter {
    toasts: Mutex<Vec<String>>,
    surface: RecordingSurface,
}

#[derive(Default)]
pub struct RecordingSurface {
    blocks: Mutex<Vec<DetailBlock>>,
}

impl RecordingPresenter {
    pub fn toasts(&self) -> Vec<String> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn blocks(&self) -> Vec<DetailBlock> {
        self.surface.blocks.lock().unwrap().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn toast(&self, text: &str) {
        self.toasts.lock().unwrap().push(text.to_string());
    }

    fn surface(&self, id: &str) -> Option<&dyn DetailSurface> {
        (id == DETAIL_SURFACE_ID).then_some(&self.surface as &dyn DetailSurface)
    }
}

impl DetailSurface for RecordingSurface {
    fn render(&self, block: &DetailBlock) {
        self.blocks.lock().unwrap().push(block.clone());
    }
}
