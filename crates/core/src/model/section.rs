use crate::model::ids::{SectionId, SegmentId};
use crate::model::scene::MediaRef;

//
// ─── HUB ───────────────────────────────────────────────────────────────────────
//

/// Corner of the hub a section occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

/// A hub entry pointing to one section page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub segment: SegmentId,
    pub name: String,
    pub path: SectionId,
    pub kanji: String,
    pub translation: String,
    pub sub_meanings: Vec<String>,
    pub background: MediaRef,
    pub quadrant: Quadrant,
}

//
// ─── SECTION PAGES ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Orange,
    Blue,
    Purple,
}

impl Tone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Green => "tone-green",
            Self::Orange => "tone-orange",
            Self::Blue => "tone-blue",
            Self::Purple => "tone-purple",
        }
    }
}

/// Hoverable item inside a facet (an image with a caption).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetDetail {
    pub title: String,
    pub description: String,
    pub image: Option<MediaRef>,
}

/// A selectable card on a section page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub segment: SegmentId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub tone: Tone,
    pub details: Vec<FacetDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPage {
    pub path: SectionId,
    pub title: String,
    pub epigraph: Option<String>,
    pub facets: Vec<Facet>,
}

impl SectionPage {
    #[must_use]
    pub fn facet(&self, segment: SegmentId) -> Option<&Facet> {
        self.facets.iter().find(|facet| facet.segment == segment)
    }
}

//
// ─── SELECTION ─────────────────────────────────────────────────────────────────
//

/// What the dialogue panel of a section page is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectedContent {
    #[default]
    None,
    Section(SegmentId),
    SectionDetail { facet: SegmentId, detail: usize },
}

impl SelectedContent {
    /// The facet currently open, whether or not a detail is hovered.
    #[must_use]
    pub fn facet(self) -> Option<SegmentId> {
        match self {
            Self::None => None,
            Self::Section(facet) | Self::SectionDetail { facet, .. } => Some(facet),
        }
    }

    /// Toggle a facet: selecting the open one closes it, any other replaces
    /// the selection and drops the hovered detail.
    #[must_use]
    pub fn toggle(self, facet: SegmentId) -> Self {
        if self.facet() == Some(facet) {
            Self::None
        } else {
            Self::Section(facet)
        }
    }

    /// Hovering a detail only applies to the facet that is open.
    #[must_use]
    pub fn hover_detail(self, facet: SegmentId, detail: usize) -> Self {
        if self.facet() == Some(facet) {
            Self::SectionDetail { facet, detail }
        } else {
            self
        }
    }

    #[must_use]
    pub fn leave_detail(self) -> Self {
        match self {
            Self::SectionDetail { facet, .. } => Self::Section(facet),
            other => other,
        }
    }

    /// Resolve the selection against a page into the text to reveal.
    #[must_use]
    pub fn resolve<'a>(self, page: &'a SectionPage) -> Option<ResolvedContent<'a>> {
        match self {
            Self::None => None,
            Self::Section(segment) => page.facet(segment).map(ResolvedContent::Facet),
            Self::SectionDetail { facet, detail } => {
                let facet = page.facet(facet)?;
                facet
                    .details
                    .get(detail)
                    .map(|detail| ResolvedContent::Detail { facet, detail })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedContent<'a> {
    Facet(&'a Facet),
    Detail {
        facet: &'a Facet,
        detail: &'a FacetDetail,
    },
}

impl<'a> ResolvedContent<'a> {
    #[must_use]
    pub fn heading(self) -> &'a str {
        match self {
            Self::Facet(facet) => &facet.title,
            Self::Detail { detail, .. } => &detail.title,
        }
    }

    #[must_use]
    pub fn body(self) -> &'a str {
        match self {
            Self::Facet(facet) => &facet.description,
            Self::Detail { detail, .. } => &detail.description,
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Facet(facet) | Self::Detail { facet, .. } => facet.tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SectionPage {
        let detail = |title: &str| FacetDetail {
            title: title.to_string(),
            description: format!("{title} body"),
            image: None,
        };
        SectionPage {
            path: SectionId::new("/test_self").unwrap(),
            title: "Test".into(),
            epigraph: None,
            facets: vec![
                Facet {
                    segment: SegmentId::new(1),
                    title: "One".into(),
                    subtitle: None,
                    description: "first".into(),
                    tone: Tone::Green,
                    details: vec![detail("A"), detail("B")],
                },
                Facet {
                    segment: SegmentId::new(2),
                    title: "Two".into(),
                    subtitle: None,
                    description: "second".into(),
                    tone: Tone::Blue,
                    details: vec![],
                },
            ],
        }
    }

    #[test]
    fn toggle_twice_clears() {
        let one = SegmentId::new(1);
        let selected = SelectedContent::None.toggle(one);
        assert_eq!(selected, SelectedContent::Section(one));
        assert_eq!(selected.toggle(one), SelectedContent::None);
    }

    #[test]
    fn switching_facet_drops_detail() {
        let selected = SelectedContent::Section(SegmentId::new(1)).hover_detail(SegmentId::new(1), 1);
        let switched = selected.toggle(SegmentId::new(2));
        assert_eq!(switched, SelectedContent::Section(SegmentId::new(2)));
    }

    #[test]
    fn hover_on_closed_facet_is_ignored() {
        let selected = SelectedContent::Section(SegmentId::new(2));
        assert_eq!(selected.hover_detail(SegmentId::new(1), 0), selected);
    }

    #[test]
    fn resolve_detail_and_leave() {
        let page = page();
        let selected = SelectedContent::Section(SegmentId::new(1)).hover_detail(SegmentId::new(1), 1);
        let resolved = selected.resolve(&page).unwrap();
        assert_eq!(resolved.heading(), "B");
        assert_eq!(resolved.body(), "B body");
        assert_eq!(resolved.tone(), Tone::Green);

        let back = selected.leave_detail().resolve(&page).unwrap();
        assert_eq!(back.body(), "first");
    }

    #[test]
    fn resolve_missing_detail_is_none() {
        let page = page();
        let selected = SelectedContent::SectionDetail {
            facet: SegmentId::new(2),
            detail: 0,
        };
        assert!(selected.resolve(&page).is_none());
    }
}
