//! Standard Surfopoly card decks.

use super::card::Card;
use super::effect::CardEffect;

/// The standard Chance cards, unshuffled.
#[must_use]
pub fn chance_cards() -> Vec<Card> {
    vec![
        Card::chance("Your surfboard sponsorship pays out! Collect $150", CardEffect::Collect(150)),
        Card::chance("Caught in a bad wipeout. Pay medical expenses $100", CardEffect::Pay(100)),
        Card::chance("You bought new surfing gear. Pay $150", CardEffect::Pay(150)),
        Card::chance("You earned royalties from a surf movie appearance. Collect $250", CardEffect::Collect(250)),
        Card::chance("Fined for surfing in a restricted area. Pay $200", CardEffect::Pay(200)),
        Card::chance("Dawn patrol! Paddle out to GO", CardEffect::AdvanceTo(0)),
        Card::chance("Rip current drags you back 3 spaces", CardEffect::MoveBack(3)),
        Card::chance("Dropped in on a local. Go to jail", CardEffect::GoToJail),
    ]
}

/// The standard Lucky Draw cards, unshuffled.
#[must_use]
pub fn lucky_draw_cards() -> Vec<Card> {
    vec![
        Card::lucky_draw("Win local surf competition. Collect $100", CardEffect::Collect(100)),
        Card::lucky_draw("You found a sponsorship deal! Collect $200", CardEffect::Collect(200)),
        Card::lucky_draw("You won a local surfing competition! Collect $300", CardEffect::Collect(300)),
        Card::lucky_draw("Repair your surfboard. Pay $100", CardEffect::Pay(100)),
        Card::lucky_draw("Beach bonfire party. Collect $10 from every player", CardEffect::CollectFromEachPlayer(10)),
        Card::lucky_draw("Shout the crew a round of acai bowls. Pay every player $20", CardEffect::PayEachPlayer(20)),
    ]
}
