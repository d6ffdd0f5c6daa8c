/// What a state produced for one input item: maybe an output, maybe the state
/// to switch to, and how the driver should move along the input.
pub type Transition<In, Out, Error> = (
    Option<Out>,
    Option<Box<dyn State<In, Out, Error>>>,
    SequenceAction,
);

pub trait State<In, Out, Error> {
    /// `c` is `None` once the input is exhausted.
    fn handle(&mut self, c: Option<In>) -> Result<Transition<In, Out, Error>, Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceAction {
    /// Consume the current item.
    Advance,
    /// Leave the current item for the next state.
    Hold,
    /// Input exhausted, stop driving.
    Done,
}
