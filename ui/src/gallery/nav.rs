//! Shared navigation state for the portfolio: which project is open and
//! where its lightbox is. Owned by the portfolio section, handed to the
//! modal, carousel and lightbox as a `Signal<GalleryNav>`.

use super::lightbox::{Lightbox, Step};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryNav {
    project: Option<u32>,
    lightbox: Lightbox,
}

impl GalleryNav {
    pub fn project(&self) -> Option<u32> {
        self.project
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Open a project's detail view. Any lightbox from a previous project is
    /// discarded.
    pub fn open_project(&mut self, id: u32) {
        self.project = Some(id);
        self.lightbox.close();
    }

    /// Closing the project also closes its lightbox.
    pub fn close_project(&mut self) {
        self.project = None;
        self.lightbox.close();
    }

    pub fn open_image(&mut self, index: usize, len: usize) -> Option<usize> {
        self.project?;
        self.lightbox.open(index, len)
    }

    pub fn step(&mut self, step: Step, len: usize) -> Option<usize> {
        self.lightbox.step(step, len)
    }

    pub fn close_image(&mut self) {
        self.lightbox.close();
    }

    pub fn image_loaded(&mut self, request: u64) {
        self.lightbox.load_complete(request);
    }

    pub fn image_failed(&mut self, request: u64, fallback: &str) {
        self.lightbox.load_error(request, fallback);
    }
}
