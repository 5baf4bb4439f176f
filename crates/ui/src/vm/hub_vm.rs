use sense_core::Catalog;
use sense_core::model::{ProgressState, SegmentId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HubTileVm {
    pub segment: SegmentId,
    pub name: String,
    pub kanji: String,
    pub translation: String,
    pub slug: String,
    pub background: String,
    pub class: String,
    pub visited: bool,
}

/// Flyout content for the active tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HubPanelVm {
    pub name: String,
    pub kanji: String,
    pub translation: String,
    pub sub_meanings: Vec<String>,
    pub background: String,
    pub on_left: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CenterButtonVm {
    pub label: String,
    pub unlocked: bool,
}

#[must_use]
pub fn map_hub_tiles(
    catalog: &Catalog,
    progress: &ProgressState,
    active: Option<SegmentId>,
) -> Vec<HubTileVm> {
    catalog
        .sections()
        .iter()
        .map(|section| {
            let visited = progress.has_visited(&section.path);
            let mut class = format!("tile {}", section.quadrant.css_class());
            match active {
                Some(id) if id == section.segment => class.push_str(" active"),
                Some(_) => class.push_str(" dimmed"),
                None => {}
            }
            if visited {
                class.push_str(" visited");
            }
            HubTileVm {
                segment: section.segment,
                name: section.name.clone(),
                kanji: section.kanji.clone(),
                translation: section.translation.clone(),
                slug: section.path.slug().to_owned(),
                background: section.background.as_str().to_owned(),
                class,
                visited,
            }
        })
        .collect()
}

#[must_use]
pub fn map_hub_panel(catalog: &Catalog, active: Option<SegmentId>) -> Option<HubPanelVm> {
    let section = catalog.section(active?)?;
    Some(HubPanelVm {
        name: section.name.clone(),
        kanji: section.kanji.clone(),
        translation: section.translation.clone(),
        sub_meanings: section.sub_meanings.clone(),
        background: section.background.as_str().to_owned(),
        on_left: section.quadrant.is_left(),
    })
}

/// Shows `n/threshold` until the reflection unlocks.
#[must_use]
pub fn center_button(progress: &ProgressState, threshold: usize) -> CenterButtonVm {
    if progress.unlocked() {
        CenterButtonVm {
            label: "REFLECT".into(),
            unlocked: true,
        }
    } else {
        CenterButtonVm {
            label: format!("{}/{}", progress.visit_count(), threshold),
            unlocked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::standard().unwrap()
    }

    #[test]
    fn tiles_dim_everything_but_the_active_one() {
        let catalog = catalog();
        let tiles = map_hub_tiles(&catalog, &ProgressState::default(), Some(SegmentId::new(2)));
        assert_eq!(tiles.len(), 4);
        assert!(tiles[1].class.contains("active"));
        assert!(tiles.iter().filter(|t| t.class.contains("dimmed")).count() == 3);
    }

    #[test]
    fn visited_tiles_are_marked() {
        let catalog = catalog();
        let policy = catalog.default_policy().unwrap();
        let path = catalog.sections()[3].path.clone();
        let progress = ProgressState::from_visited([path], &policy);
        let tiles = map_hub_tiles(&catalog, &progress, None);
        assert!(tiles[3].visited);
        assert!(!tiles[0].visited);
        assert!(!tiles[0].class.contains("dimmed"));
    }

    #[test]
    fn panel_follows_active_segment() {
        let catalog = catalog();
        assert!(map_hub_panel(&catalog, None).is_none());
        assert!(map_hub_panel(&catalog, Some(SegmentId::new(99))).is_none());
        let panel = map_hub_panel(&catalog, Some(SegmentId::new(3))).unwrap();
        assert_eq!(panel.kanji, "身体");
        assert!(panel.on_left);
        assert_eq!(panel.sub_meanings.len(), 4);
    }

    #[test]
    fn center_button_counts_until_unlocked() {
        let catalog = catalog();
        let policy = catalog.default_policy().unwrap();
        let some = ProgressState::from_visited(
            catalog.sections()[..2].iter().map(|s| s.path.clone()),
            &policy,
        );
        assert_eq!(center_button(&some, 4).label, "2/4");

        let all = ProgressState::from_visited(
            catalog.sections().iter().map(|s| s.path.clone()),
            &policy,
        );
        let button = center_button(&all, 4);
        assert!(button.unlocked);
        assert_eq!(button.label, "REFLECT");
    }
}
