mod ids;
mod progress;
mod scene;
mod section;

pub use ids::{ParseIdError, SceneId, SectionId, SegmentId};
pub use progress::{
    DEFAULT_UNLOCK_THRESHOLD, ProgressState, UnlockPolicy, UnlockPolicyError, UnlockSignal,
    VisitOutcome,
};
pub use scene::{MediaRef, Scene, SceneError};
pub use section::{
    Facet, FacetDetail, Quadrant, ResolvedContent, Section, SectionPage, SelectedContent, Tone,
};
