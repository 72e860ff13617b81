use crate::controllers::frame_loop::data::frame_data::FrameData;
use std::io;

pub trait DisplayPort {
    fn present(&mut self, frame: &FrameData<'_>) -> io::Result<()>;
}
