#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// Gallery lightbox: which project is open and which of its images is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: Option<OpenProject>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenProject {
    project: usize,
    image: usize,
    image_count: usize,
}

impl Lightbox {
    /// Open `project` at `image`. Projects without images stay closed and
    /// an out-of-range image starts at the first one.
    pub fn open(&mut self, project: usize, image_count: usize, image: usize) {
        if image_count == 0 {
            self.close();
            return;
        }
        let image = if image < image_count { image } else { 0 };
        self.open = Some(OpenProject { project, image, image_count });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn project(&self) -> Option<usize> {
        self.open.map(|o| o.project)
    }

    /// Index of the shown image; 0 when closed.
    pub fn image(&self) -> usize {
        self.open.map_or(0, |o| o.image)
    }

    /// Advance, wrapping from the last image to the first.
    pub fn next(&mut self) {
        if let Some(o) = self.open.as_mut() {
            o.image = if o.image + 1 == o.image_count { 0 } else { o.image + 1 };
        }
    }

    /// Go back, wrapping from the first image to the last.
    pub fn prev(&mut self) {
        if let Some(o) = self.open.as_mut() {
            o.image = if o.image == 0 { o.image_count - 1 } else { o.image - 1 };
        }
    }

    /// Jump to `image`; ignored when closed or out of range.
    pub fn select(&mut self, image: usize) {
        if let Some(o) = self.open.as_mut() {
            if image < o.image_count {
                o.image = image;
            }
        }
    }
}
