pub mod frame_data;
pub mod loop_outcome;
