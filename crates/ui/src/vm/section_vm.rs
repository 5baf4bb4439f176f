use sense_core::model::{SectionPage, SegmentId, SelectedContent, VisitOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockBanner {
    Hidden,
    /// This visit crossed the threshold.
    Celebrate,
    /// Already unlocked before this visit.
    Available,
}

#[must_use]
pub fn unlock_banner(outcome: Option<&VisitOutcome>) -> UnlockBanner {
    match outcome {
        Some(outcome) if outcome.just_unlocked() => UnlockBanner::Celebrate,
        Some(outcome) if outcome.state.unlocked() => UnlockBanner::Available,
        _ => UnlockBanner::Hidden,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetCardVm {
    pub segment: SegmentId,
    pub title: String,
    pub subtitle: Option<String>,
    pub class: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailItemVm {
    pub index: usize,
    pub title: String,
    pub image: Option<String>,
    pub hovered: bool,
}

#[must_use]
pub fn map_facet_cards(page: &SectionPage, selected: SelectedContent) -> Vec<FacetCardVm> {
    page.facets
        .iter()
        .map(|facet| {
            let is_selected = selected.facet() == Some(facet.segment);
            let mut class = format!("facet {}", facet.tone.css_class());
            if is_selected {
                class.push_str(" selected");
            }
            FacetCardVm {
                segment: facet.segment,
                title: facet.title.clone(),
                subtitle: facet.subtitle.clone(),
                class,
                selected: is_selected,
            }
        })
        .collect()
}

/// Detail items of the selected facet, if any.
#[must_use]
pub fn map_detail_items(page: &SectionPage, selected: SelectedContent) -> Vec<DetailItemVm> {
    let Some(facet) = selected.facet().and_then(|id| page.facet(id)) else {
        return Vec::new();
    };
    let hovered = match selected {
        SelectedContent::SectionDetail { detail, .. } => Some(detail),
        SelectedContent::None | SelectedContent::Section(_) => None,
    };
    facet
        .details
        .iter()
        .enumerate()
        .map(|(index, detail)| DetailItemVm {
            index,
            title: detail.title.clone(),
            image: detail.image.as_ref().map(|m| m.as_str().to_owned()),
            hovered: hovered == Some(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sense_core::Catalog;
    use sense_core::model::{ProgressState, UnlockSignal};

    fn page() -> SectionPage {
        Catalog::standard()
            .unwrap()
            .page_by_slug("philosophical_self")
            .unwrap()
            .clone()
    }

    #[test]
    fn banner_distinguishes_crossing_from_steady_state() {
        assert_eq!(unlock_banner(None), UnlockBanner::Hidden);

        let catalog = Catalog::standard().unwrap();
        let policy = catalog.default_policy().unwrap();
        let paths: Vec<_> = catalog.sections().iter().map(|s| s.path.clone()).collect();

        let three = ProgressState::from_visited(paths[..3].to_vec(), &policy);
        let crossing = three.apply_visit(&paths[3], &policy);
        assert_eq!(crossing.signal, UnlockSignal::JustUnlocked);
        assert_eq!(unlock_banner(Some(&crossing)), UnlockBanner::Celebrate);

        let revisit = crossing.state.apply_visit(&paths[0], &policy);
        assert_eq!(unlock_banner(Some(&revisit)), UnlockBanner::Available);

        let early = ProgressState::default().apply_visit(&paths[0], &policy);
        assert_eq!(unlock_banner(Some(&early)), UnlockBanner::Hidden);
    }

    #[test]
    fn only_the_selected_facet_is_marked() {
        let page = page();
        let id = page.facets[1].segment;
        let cards = map_facet_cards(&page, SelectedContent::None.toggle(id));
        assert!(cards[1].selected);
        assert!(cards[1].class.contains("selected"));
        assert!(!cards[0].selected);
    }

    #[test]
    fn details_follow_selection_and_hover() {
        let page = page();
        assert!(map_detail_items(&page, SelectedContent::None).is_empty());

        let id = page.facets[0].segment;
        let selected = SelectedContent::None.toggle(id);
        let items = map_detail_items(&page, selected);
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| !i.hovered));

        let items = map_detail_items(&page, selected.hover_detail(id, 2));
        assert!(items[2].hovered);
        assert_eq!(items[2].title, "PHYSICAL TRAINING");
    }
}
