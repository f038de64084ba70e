use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_progress::RenderProgress;

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Progress(RenderProgress),
}
