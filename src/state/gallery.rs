//! Filter and lightbox state for the photo gallery.

pub const ALL_FILTER: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: &'static str,
    pub category: &'static str,
    pub category_label: &'static str,
    pub thumb: &'static str,
    pub full: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    items: Vec<GalleryItem>,
    filter: String,
    lightbox: Option<usize>,
}

impl GalleryView {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            filter: ALL_FILTER.to_string(),
            lightbox: None,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Items matching the current filter, in their original order.
    pub fn visible(&self) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .filter(|item| self.filter == ALL_FILTER || item.category == self.filter)
            .collect()
    }

    /// The overlay covers the tabs, so switching filters also closes it,
    /// which keeps the lightbox index valid for the new subset.
    pub fn set_filter(&mut self, filter: &str) {
        if self.filter != filter {
            self.filter = filter.to_string();
            self.lightbox = None;
        }
    }

    /// Opens the lightbox at an index within the visible subset.
    pub fn open(&mut self, index: usize) {
        if index < self.visible().len() {
            self.lightbox = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Moves the lightbox by `delta`, wrapping over the visible subset.
    /// Does nothing while the lightbox is hidden.
    pub fn step(&mut self, delta: isize) {
        let len = self.visible().len() as isize;
        if let Some(index) = self.lightbox {
            if len > 0 {
                self.lightbox = Some((index as isize + delta).rem_euclid(len) as usize);
            }
        }
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        let visible = self.visible();
        self.lightbox.and_then(|index| visible.get(index).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &'static str, category: &'static str) -> GalleryItem {
        GalleryItem {
            id,
            category,
            category_label: "",
            thumb: "",
            full: "",
            alt: "",
            caption: "",
        }
    }

    fn sample() -> GalleryView {
        GalleryView::new(vec![
            item("r1", "rehearsal"),
            item("s1", "stage"),
            item("b1", "backstage"),
            item("r2", "rehearsal"),
        ])
    }

    #[test]
    fn all_filter_shows_every_item_in_order() {
        let view = sample();
        let ids: Vec<_> = view.visible().iter().map(|item| item.id).collect();
        assert_eq!(ids, ["r1", "s1", "b1", "r2"]);
    }

    #[test]
    fn category_filter_is_an_exact_match() {
        let mut view = sample();
        view.set_filter("rehearsal");
        let ids: Vec<_> = view.visible().iter().map(|item| item.id).collect();
        assert_eq!(ids, ["r1", "r2"]);

        view.set_filter("costumes");
        assert!(view.visible().is_empty());
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let mut view = sample();
        view.open(0);
        view.step(-1);
        assert_eq!(view.current().unwrap().id, "r2");
        view.step(1);
        assert_eq!(view.current().unwrap().id, "r1");
        view.step(5);
        assert_eq!(view.current().unwrap().id, "s1");
    }

    #[test]
    fn hidden_lightbox_ignores_navigation() {
        let mut view = sample();
        view.step(1);
        assert_eq!(view.current(), None);

        view.open(2);
        view.close();
        view.step(-1);
        assert!(!view.is_open());
    }

    #[test]
    fn open_requires_an_index_within_the_subset() {
        let mut view = sample();
        view.set_filter("stage");
        view.open(1);
        assert!(!view.is_open());
        view.open(0);
        assert_eq!(view.current().unwrap().id, "s1");
    }

    #[test]
    fn switching_filters_closes_the_lightbox() {
        let mut view = sample();
        view.open(3);
        view.set_filter("stage");
        assert!(!view.is_open());

        view.open(0);
        view.set_filter("stage");
        assert!(view.is_open(), "re-selecting the active filter keeps it open");
    }
}
