//! Closed-loop motion control

pub mod turn;

pub use turn::{
    ActiveTurn, TurnBudget, TurnController, TurnReport, TurnRequest, TurnState, TurnStrategy,
};
