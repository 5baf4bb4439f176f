mod hub_vm;
mod reflection_vm;
mod section_vm;

pub use hub_vm::{CenterButtonVm, HubPanelVm, HubTileVm, center_button, map_hub_panel, map_hub_tiles};
pub use reflection_vm::{scene_counter, scene_status};
pub use section_vm::{
    DetailItemVm, FacetCardVm, UnlockBanner, map_detail_items, map_facet_cards, unlock_banner,
};
