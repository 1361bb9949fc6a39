//! Library half of the studymark binary, shared with its tests.

pub mod transforms;
