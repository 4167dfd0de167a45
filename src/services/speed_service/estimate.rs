use super::parse_yardage;
use crate::models::{ClubId, EstimationResult, Joke, SpeedStatus};
use log::debug;

const MIN_IRON_YARDS: i64 = 30;
const MIN_FULL_SWING_YARDS: i64 = 60;
const MAX_IRON_YARDS: i64 = 250;
const MAX_ANY_CLUB_YARDS: i64 = 400;

/// Estimates clubhead speed for `club` from raw carry-distance text.
///
/// Guards run in order and the first match decides the result:
/// unparseable, `< 30`, `< 60`, `> 400`, `> 250`. Anything left
/// (60..=250) is converted with the club's divisor.
pub fn estimate(club: ClubId, raw_yardage: Option<&str>) -> EstimationResult {
    let Some(yards) = raw_yardage.and_then(parse_yardage) else {
        debug!("club {}: no usable yardage in {:?}", club, raw_yardage);
        return EstimationResult::Joke(Joke::NotANumber);
    };

    if let Some(joke) = out_of_range(yards) {
        debug!("club {}: {} yds rejected as {}", club, yards, joke.label());
        return EstimationResult::Joke(joke);
    }

    let profile = club.profile();
    let speed_mph = (yards as f64 / profile.divisor).round() as i64;
    let delta_mph = speed_mph - profile.avg_speed_mph;
    let status = SpeedStatus::classify(delta_mph);
    debug!(
        "club {}: {} yds -> {} mph ({:+} vs avg, {})",
        club, yards, speed_mph, delta_mph, status
    );

    EstimationResult::Normal {
        club,
        speed_mph,
        delta_mph,
        status,
    }
}

fn out_of_range(yards: i64) -> Option<Joke> {
    if yards < MIN_IRON_YARDS {
        Some(Joke::DroppedBall)
    } else if yards < MIN_FULL_SWING_YARDS {
        Some(Joke::Putting)
    } else if yards > MAX_ANY_CLUB_YARDS {
        Some(Joke::Rocket)
    } else if yards > MAX_IRON_YARDS {
        Some(Joke::NotAnIron)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(club: ClubId, raw: &str) -> String {
        estimate(club, Some(raw)).headline()
    }

    #[test]
    fn seven_iron_150_is_tour_level() {
        assert_eq!(
            estimate(ClubId::Seven, Some("150")),
            EstimationResult::Normal {
                club: ClubId::Seven,
                speed_mph: 81,
                delta_mph: 6,
                status: SpeedStatus::Fast,
            }
        );
    }

    #[test]
    fn seven_iron_139_is_average() {
        assert_eq!(
            estimate(ClubId::Seven, Some("139")),
            EstimationResult::Normal {
                club: ClubId::Seven,
                speed_mph: 75,
                delta_mph: 0,
                status: SpeedStatus::Average,
            }
        );
    }

    #[test]
    fn five_iron_100_is_below_average() {
        assert_eq!(
            estimate(ClubId::Five, Some("100")),
            EstimationResult::Normal {
                club: ClubId::Five,
                speed_mph: 49,
                delta_mph: -32,
                status: SpeedStatus::BelowAverage,
            }
        );
    }

    #[test]
    fn above_average_band() {
        // 145 / 1.85 = 78.4 -> 78, three over the 7 iron average
        let result = estimate(ClubId::Seven, Some("145"));
        assert_eq!(
            result,
            EstimationResult::Normal {
                club: ClubId::Seven,
                speed_mph: 78,
                delta_mph: 3,
                status: SpeedStatus::AboveAverage,
            }
        );
    }

    #[test]
    fn unparseable_input() {
        for club in ClubId::ALL {
            assert_eq!(estimate(club, None), EstimationResult::Joke(Joke::NotANumber));
            assert_eq!(label(club, ""), "???");
            assert_eq!(label(club, "abc"), "???");
        }
    }

    #[test]
    fn short_boundaries() {
        assert_eq!(label(ClubId::Seven, "-10"), "Oops!");
        assert_eq!(label(ClubId::Seven, "0"), "Oops!");
        assert_eq!(label(ClubId::Seven, "29"), "Oops!");
        assert_eq!(label(ClubId::Seven, "30"), "Putt?");
        assert_eq!(label(ClubId::Seven, "59"), "Putt?");
        assert!(!estimate(ClubId::Seven, Some("60")).is_joke());
    }

    #[test]
    fn long_boundaries() {
        assert!(!estimate(ClubId::Four, Some("250")).is_joke());
        assert_eq!(label(ClubId::Four, "251"), "OMG");
        assert_eq!(label(ClubId::Four, "400"), "OMG");
        assert_eq!(label(ClubId::Four, "401"), "UFO");
        assert_eq!(label(ClubId::Four, "99999999999999999999"), "UFO");
    }

    #[test]
    fn joke_messages() {
        assert_eq!(
            estimate(ClubId::Nine, Some("10")).caption(),
            "Did you just drop the ball from your pocket?"
        );
        assert_eq!(
            estimate(ClubId::Nine, Some("45")).caption(),
            "Are you putting with an iron?"
        );
        assert_eq!(
            estimate(ClubId::Nine, Some("300")).caption(),
            "Calm down, Bryson DeChambeau. Sir, this is an iron."
        );
        assert_eq!(
            estimate(ClubId::Nine, Some("500")).caption(),
            "NASA called. They want their rocket back."
        );
    }

    #[test]
    fn speed_matches_divisor_across_normal_range() {
        for club in ClubId::ALL {
            let profile = club.profile();
            for yards in MIN_FULL_SWING_YARDS..=MAX_IRON_YARDS {
                let expected = (yards as f64 / profile.divisor).round() as i64;
                match estimate(club, Some(&yards.to_string())) {
                    EstimationResult::Normal {
                        speed_mph,
                        delta_mph,
                        ..
                    } => {
                        assert_eq!(speed_mph, expected, "{club} at {yards}");
                        assert_eq!(delta_mph, expected - profile.avg_speed_mph);
                    }
                    other => panic!("{club} at {yards} gave {other:?}"),
                }
            }
        }
    }

    #[test]
    fn repeated_calls_agree() {
        for raw in ["150", "abc", "29", "401"] {
            assert_eq!(
                estimate(ClubId::Eight, Some(raw)),
                estimate(ClubId::Eight, Some(raw))
            );
        }
    }
}
