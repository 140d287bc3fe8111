//! Profile photo with a one-shot placeholder fallback.
//!
//! The failed state is sticky: once the image has failed, every render shows
//! the placeholder and the image is never requested again.

use crate::style::{self, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePhoto {
    pub src: String,
    pub alt: String,
    state: PhotoState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoView {
    Image {
        src: String,
        alt: String,
        style: Style,
    },
    /// Grey circle of the photo's size.
    Placeholder { style: Style },
}

impl ProfilePhoto {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            state: PhotoState::Pending,
        }
    }

    pub fn state(&self) -> PhotoState {
        self.state
    }

    pub fn mark_loaded(&mut self) {
        if self.state == PhotoState::Pending {
            self.state = PhotoState::Loaded;
        }
    }

    /// Returns true only for the failure that swaps in the placeholder.
    pub fn mark_failed(&mut self) -> bool {
        if self.state == PhotoState::Failed {
            return false;
        }
        tracing::warn!(src = %self.src, "profile photo failed to load; showing placeholder");
        self.state = PhotoState::Failed;
        true
    }

    pub fn view(&self) -> PhotoView {
        match self.state {
            PhotoState::Pending | PhotoState::Loaded => PhotoView::Image {
                src: self.src.clone(),
                alt: self.alt.clone(),
                style: style::profile_photo(),
            },
            PhotoState::Failed => PhotoView::Placeholder {
                style: style::photo_placeholder(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_image_until_failure() {
        let mut photo = ProfilePhoto::new("/me.jpg", "Profile");
        assert!(matches!(photo.view(), PhotoView::Image { ref src, .. } if src == "/me.jpg"));

        photo.mark_loaded();
        assert_eq!(photo.state(), PhotoState::Loaded);
        assert!(matches!(photo.view(), PhotoView::Image { .. }));
    }

    #[test]
    fn failure_is_one_shot() {
        let mut photo = ProfilePhoto::new("/missing.jpg", "Profile");
        assert!(photo.mark_failed());
        assert!(!photo.mark_failed());
        assert!(!photo.mark_failed());

        let placeholders = (0..3)
            .map(|_| photo.view())
            .filter(|v| matches!(v, PhotoView::Placeholder { .. }))
            .count();
        assert_eq!(placeholders, 3, "every render shows the single placeholder");

        // A late load event cannot bring the image back.
        photo.mark_loaded();
        assert_eq!(photo.state(), PhotoState::Failed);
    }

    #[test]
    fn placeholder_is_a_circle_of_photo_size() {
        let mut photo = ProfilePhoto::new("/x.jpg", "Profile");
        photo.mark_failed();
        let PhotoView::Placeholder { style } = photo.view() else {
            panic!("expected placeholder");
        };
        assert_eq!(style.get("width"), Some("120px"));
        assert_eq!(style.get("height"), Some("120px"));
        assert_eq!(style.get("border-radius"), Some("50%"));
    }
}
