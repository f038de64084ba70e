use crate::controllers::interactive::events::render::RenderEvent;

/// Presentation surface for rendered frames.
///
/// Frames arrive complete and by value; the renderer never touches a buffer
/// again once it has been presented.
pub trait PresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
