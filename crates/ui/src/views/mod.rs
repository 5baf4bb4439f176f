mod highlight;
mod hub;
mod not_found;
mod reflection;
mod reveal;
mod section;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use hub::HubView;
pub use not_found::NotFoundView;
pub use reflection::ReflectionView;
pub use reveal::use_reveal;
pub use section::SectionView;
