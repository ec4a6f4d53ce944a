use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("err-not-owner: signer is not the lottery owner")]
    NotOwner,

    #[msg("err-lottery-active: a round is already open")]
    LotteryActive,

    #[msg("err-lottery-not-active: no round is open")]
    LotteryNotActive,

    #[msg("err-insufficient-funds: balance does not cover the transfer")]
    InsufficientFunds,

    #[msg("err-min-participants-not-met: not enough distinct participants to draw")]
    MinParticipantsNotMet,

    #[msg("err-invalid-argument: argument is out of range")]
    InvalidArgument,

    #[msg("err-participant-limit-reached: the round has no room for another participant")]
    ParticipantLimitReached,

    #[msg("err-arithmetic-overflow: amount does not fit in 64 bits")]
    ArithmeticOverflow,

    #[msg("err-randomness-out-of-range: random index is outside the ticket range")]
    RandomnessOutOfRange,

    #[msg("err-incorrect-randomness-account: randomness account does not match the committed one")]
    IncorrectRandomnessAccount,

    #[msg("err-randomness-already-revealed: randomness account is not fresh")]
    RandomnessAlreadyRevealed,

    #[msg("err-randomness-committed: randomness is already committed for this round")]
    RandomnessCommitted,

    #[msg("err-randomness-not-resolved: randomness has not been revealed yet")]
    RandomnessNotResolved,

    #[msg("err-unknown-account: an account needed for the transfer was not supplied")]
    UnknownAccount,
}
