use serde::{Deserialize, Serialize};

pub mod course;
pub mod patch;

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteResponse{
    pub id: String,
    pub deleted: bool,
}
