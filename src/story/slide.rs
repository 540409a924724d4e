//! Read-only narrative data backing a story section.

use std::rc::Rc;

/// One narrative beat. Slides are defined statically per section and never
/// change after the deck is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// 0-based position inside the deck, assigned by [`SlideDeck::new`].
    pub index: usize,
    pub title: &'static str,
    pub body: &'static str,
    /// Accent color token for this beat.
    pub accent_color: &'static str,
    /// Accent gradient used by tiles and active indicators.
    pub accent_gradient: &'static str,
    /// Opaque handle to the slide's visual asset (emoji or asset path).
    pub icon_ref: &'static str,
    /// Short labels attached to the beat (highlight line, chips).
    pub tags: &'static [&'static str],
}

impl Slide {
    pub fn new(
        title: &'static str,
        body: &'static str,
        accent_color: &'static str,
        accent_gradient: &'static str,
        icon_ref: &'static str,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            index: 0,
            title,
            body,
            accent_color,
            accent_gradient,
            icon_ref,
            tags,
        }
    }

    /// The highlight line, when the section uses one.
    pub fn highlight(&self) -> Option<&'static str> {
        self.tags.first().copied()
    }
}

/// An ordered, immutable collection of slides. Cheap to clone; clones share
/// the same backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDeck {
    slides: Rc<[Slide]>,
}

impl SlideDeck {
    pub fn new(mut slides: Vec<Slide>) -> Self {
        for (i, slide) in slides.iter_mut().enumerate() {
            slide.index = i;
        }
        Self {
            slides: slides.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_assigns_indices_in_order() {
        let deck = SlideDeck::new(vec![
            Slide::new("a", "", "#fff", "", "x", &[]),
            Slide::new("b", "", "#fff", "", "y", &[]),
            Slide::new("c", "", "#fff", "", "z", &[]),
        ]);
        let indices: Vec<usize> = deck.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn highlight_is_first_tag() {
        let slide = Slide::new("t", "b", "#000", "", "i", &["find work", "fast"]);
        assert_eq!(slide.highlight(), Some("find work"));
        let bare = Slide::new("t", "b", "#000", "", "i", &[]);
        assert_eq!(bare.highlight(), None);
    }
}
