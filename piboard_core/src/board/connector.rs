//! GPIO header layout resolution.

use super::model::{ConnectorLayout, Model};

/// Resolve the GPIO header layout of a board model
pub fn resolve(model: Model) -> ConnectorLayout {
    match model {
        Model::BRev1 => ConnectorLayout::Rev1,
        Model::BRev2 | Model::A => ConnectorLayout::Rev2,
        Model::BPlus
        | Model::ComputeModule
        | Model::APlus
        | Model::B2
        | Model::Zero
        | Model::ZeroW
        | Model::B3
        | Model::ComputeModule3 => ConnectorLayout::Plus,
        Model::Unknown => ConnectorLayout::Unknown,
    }
}
