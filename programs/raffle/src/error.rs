use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    // Validation Errors (0x1000 - 0x1999)
    #[msg("Entrance fee not covered by the amount sent")]
    InsufficientFee = 0x1000,

    #[msg("Raffle is not open for entries")]
    RoundNotOpen = 0x1001,

    #[msg("Player index out of range")]
    IndexOutOfRange = 0x1002,

    #[msg("Raffle has reached its player capacity")]
    RaffleFull = 0x1003,

    // Protocol Integrity Errors (0x2000 - 0x2999)
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded = 0x2000,

    #[msg("Randomness request is unknown or already fulfilled")]
    UnknownRequest = 0x2001,

    #[msg("Caller is not the designated randomness oracle")]
    Unauthorized = 0x2002,

    #[msg("Oracle delivered no random words")]
    MissingRandomWords = 0x2003,

    #[msg("Randomness account already revealed")]
    RandomnessAlreadyRevealed = 0x2004,

    #[msg("Randomness not resolved")]
    RandomnessNotResolved = 0x2005,

    #[msg("Configured randomness account was not supplied")]
    RandomnessAccountRequired = 0x2006,

    // Invariant Errors (0x3000 - 0x3999)
    #[msg("No players in the round being settled")]
    NoParticipants = 0x3000,

    #[msg("Arithmetic overflow")]
    MathOverflow = 0x3001,

    // Payout Errors (0x4000 - 0x4999)
    #[msg("Prize transfer to the winner failed")]
    TransferFailed = 0x4000,

    #[msg("Winner account does not match the drawn player")]
    WinnerAccountMismatch = 0x4001,

    // Configuration Errors (0x5000 - 0x5999)
    #[msg("Entrance fee must cover the rent-exempt minimum of an empty account")]
    InvalidEntranceFee = 0x5000,

    #[msg("Interval must not be negative")]
    InvalidInterval = 0x5001,

    #[msg("Requested word count out of range")]
    InvalidWordCount = 0x5002,

    #[msg("Randomness coordinator must be set")]
    InvalidCoordinator = 0x5003,
}
