//! Phases of the arithmetic input state machine.

use crate::state_enum;

state_enum! {
    /// Where the calculator sits in the entry of a binary expression.
    ///
    /// The phase is derived from the machine's data; it is never stored.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// No operator is pending; digits build or extend the current operand.
        Entering,
        /// An operator was just chosen; the next digit starts a new operand.
        OperatorPending,
        /// Digits typed after an operator; `=` will evaluate.
        AccumulatingSecondOperand,
        /// The display holds an error sentinel.
        Errored,
    }
    error: [Errored]
}
