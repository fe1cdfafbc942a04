use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum FirstPlayerMode {
    #[default]
    Player,
    Computer,
    Random,
}
