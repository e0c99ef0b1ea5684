//! Page - one-shot initialization wiring and input routing.
//!
//! The page binds the carousel controller and the guestbook store to the
//! display regions handed over by the embedding shell. Every region is
//! optional; an absent region degrades its feature to a no-op instead of
//! raising.

use crate::carousel::{Carousel, CarouselSurface, SwipeDirection, SwipeTracker};
use crate::guestbook::{editor_action, EditorAction, EditorKey, GuestbookStore, SubmitError};
use crate::render::{InputField, Region};
use crate::store::KeyValueStore;

/// Display regions owned by the shell. All optional.
#[derive(Default)]
pub struct Regions {
    pub carousel: Option<Box<dyn CarouselSurface>>,
    pub message_list: Option<Box<dyn Region>>,
    pub author_input: Option<Box<dyn InputField>>,
    pub body_input: Option<Box<dyn InputField>>,
}

impl Regions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_carousel(mut self, surface: impl CarouselSurface + 'static) -> Self {
        self.carousel = Some(Box::new(surface));
        self
    }

    pub fn with_message_list(mut self, region: impl Region + 'static) -> Self {
        self.message_list = Some(Box::new(region));
        self
    }

    pub fn with_author_input(mut self, field: impl InputField + 'static) -> Self {
        self.author_input = Some(Box::new(field));
        self
    }

    pub fn with_body_input(mut self, field: impl InputField + 'static) -> Self {
        self.body_input = Some(Box::new(field));
        self
    }
}

/// The page: carousel + guestbook + the regions they render into.
pub struct Page<S: KeyValueStore> {
    carousel: Carousel,
    swipe: SwipeTracker,
    guestbook: GuestbookStore<S>,
    regions: Regions,
}

impl<S: KeyValueStore> Page<S> {
    /// `slide_count` comes from the shell enumerating its slide markup; zero
    /// slides leaves the carousel permanently inert.
    pub fn new(slide_count: usize, store: S, regions: Regions) -> Self {
        Page {
            carousel: Carousel::new(slide_count),
            swipe: SwipeTracker::new(),
            guestbook: GuestbookStore::new(store),
            regions,
        }
    }

    /// Render the initial carousel position and the loaded guestbook.
    /// Idempotent; an unavailable durable store degrades to an empty list.
    pub fn init(&mut self) {
        self.render_carousel();
        if let Err(err) = self.guestbook.load() {
            log::warn!("guestbook storage unavailable, starting empty: {}", err);
        }
        self.render_messages();
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn guestbook(&self) -> &GuestbookStore<S> {
        &self.guestbook
    }

    pub fn guestbook_mut(&mut self) -> &mut GuestbookStore<S> {
        &mut self.guestbook
    }

    pub fn next_slide(&mut self) {
        self.carousel.next();
        self.render_carousel();
    }

    pub fn previous_slide(&mut self) {
        self.carousel.previous();
        self.render_carousel();
    }

    /// Indicator taps enumerate the fixed slide set, so `index` is in range
    /// by construction.
    pub fn indicator_tapped(&mut self, index: usize) {
        self.carousel.go_to(index);
        self.render_carousel();
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
    }

    pub fn touch_end(&mut self, x: f64) {
        match self.swipe.release(x) {
            Some(SwipeDirection::Left) => self.next_slide(),
            Some(SwipeDirection::Right) => self.previous_slide(),
            None => {}
        }
    }

    /// Read both input fields, submit, and on success clear the fields and
    /// re-render the list. A validation failure is returned synchronously
    /// for the shell to show the submitter; nothing is mutated. Absent
    /// fields make this a no-op.
    pub fn submit_clicked(&mut self) -> Result<(), SubmitError> {
        let author = match self.regions.author_input.as_ref() {
            Some(field) => field.value(),
            None => return Ok(()),
        };
        let body = match self.regions.body_input.as_ref() {
            Some(field) => field.value(),
            None => return Ok(()),
        };

        self.guestbook.submit(&author, &body)?;

        if let Some(field) = self.regions.author_input.as_mut() {
            field.clear();
        }
        if let Some(field) = self.regions.body_input.as_mut() {
            field.clear();
        }
        self.render_messages();
        Ok(())
    }

    /// Key press inside the message field. Plain Enter submits; Shift+Enter
    /// is left to the field as a literal line break.
    pub fn message_field_key(&mut self, key: EditorKey) -> Result<EditorAction, SubmitError> {
        let action = editor_action(key);
        if action == EditorAction::Submit {
            self.submit_clicked()?;
        }
        Ok(action)
    }

    fn render_carousel(&mut self) {
        if let Some(frame) = self.carousel.frame() {
            if let Some(surface) = self.regions.carousel.as_mut() {
                surface.apply(&frame);
            }
        }
    }

    fn render_messages(&mut self) {
        if let Some(region) = self.regions.message_list.as_mut() {
            self.guestbook.render_into(region.as_mut());
        }
    }
}
