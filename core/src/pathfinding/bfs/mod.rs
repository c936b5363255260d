mod state;

pub(crate) use state::BfsState;
