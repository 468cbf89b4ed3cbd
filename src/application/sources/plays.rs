#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Play {
    pub code: &'static str,
    pub title: &'static str,
}

const fn play(code: &'static str, title: &'static str) -> Play {
    Play { code, title }
}

/// Folger Digital Texts play codes, used verbatim as URL path segments.
pub const PLAYS: [Play; 38] = [
    play("AWW", "All's Well That Ends Well"),
    play("Ant", "Antony and Cleopatra"),
    play("AYL", "As You Like It"),
    play("Err", "The Comedy of Errors"),
    play("Cor", "Coriolanus"),
    play("Cym", "Cymbeline"),
    play("Ham", "Hamlet"),
    play("1H4", "Henry IV, Part 1"),
    play("2H4", "Henry IV, Part 2"),
    play("H5", "Henry V"),
    play("1H6", "Henry VI, Part 1"),
    play("2H6", "Henry VI, Part 2"),
    play("3H6", "Henry VI, Part 3"),
    play("H8", "Henry VIII"),
    play("JC", "Julius Caesar"),
    play("Jn", "King John"),
    play("Lr", "King Lear"),
    play("LLL", "Love's Labor's Lost"),
    play("Mac", "Macbeth"),
    play("MM", "Measure for Measure"),
    play("MV", "The Merchant of Venice"),
    play("Wiv", "The Merry Wives of Windsor"),
    play("MND", "A Midsummer Night's Dream"),
    play("Ado", "Much Ado About Nothing"),
    play("Oth", "Othello"),
    play("Per", "Pericles"),
    play("R2", "Richard II"),
    play("R3", "Richard III"),
    play("Rom", "Romeo and Juliet"),
    play("Shr", "The Taming of the Shrew"),
    play("Tmp", "The Tempest"),
    play("Tim", "Timon of Athens"),
    play("Tit", "Titus Andronicus"),
    play("Tro", "Troilus and Cressida"),
    play("TN", "Twelfth Night"),
    play("TGV", "Two Gentlemen of Verona"),
    play("TNK", "Two Noble Kinsmen"),
    play("WT", "The Winter's Tale"),
];

pub fn play_codes() -> impl Iterator<Item = &'static str> {
    PLAYS.iter().map(|p| p.code)
}

pub fn find_play(code: &str) -> Option<&'static Play> {
    PLAYS.iter().find(|p| p.code == code)
}
