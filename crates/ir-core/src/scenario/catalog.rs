//! The standard ransomware shift: four scenarios played in a fixed order.

use super::{Effect, ScenarioDefinition};
use crate::line::Line;

/// Build the four scenarios of a shift, in play order.
pub fn standard_shift() -> Vec<ScenarioDefinition> {
    vec![detection(), communication(), ransom(), prevention()]
}

fn detection() -> ScenarioDefinition {
    ScenarioDefinition::new(
        "detection",
        "SCENARIO 1: SUSPICIOUS ALERT",
        "Initial Response",
        "It's 2:47 AM. Your phone buzzes with an alert from the SIEM.\n\
         Multiple endpoints show unusual encryption activity and file extensions\n\
         are being changed to '.encrypted'. The help desk is fielding calls from\n\
         the night shift about files nobody can open.\n\n\
         This looks like ransomware, and it is still running.",
    )
    .with_question("What is your FIRST action?")
    .with_option(
        "Immediately shut down the entire network to stop the spread",
        Effect::new()
            .with_score(30)
            .with_reputation(-10)
            .with_minutes(5)
            .with_containment(60)
            .with_line(Line::warning("You pull the plug on the whole network."))
            .with_line(Line::warning(
                "The spread stops, but so does every business operation.",
            ))
            .with_line(Line::danger("The CEO is furious about the unplanned outage."))
            .with_line(Line::info(
                "+30 points for quick action, -10 reputation for business impact",
            )),
    )
    .with_option(
        "Investigate further to understand the scope before taking action",
        Effect::new()
            .with_score(10)
            .with_minutes(25)
            .with_containment(20)
            .with_systems_affected(50)
            .with_line(Line::danger(
                "While you investigate, the ransomware reaches 50 more systems.",
            ))
            .with_line(Line::danger("Valuable time is gone and the attack is now widespread."))
            .with_line(Line::info(
                "+10 points for gathering information, but the damage is significant",
            )),
    )
    .with_option(
        "Isolate affected systems and preserve evidence while investigating",
        Effect::new()
            .with_score(50)
            .with_minutes(10)
            .with_containment(80)
            .with_line(Line::success(
                "Excellent. Network segmentation cuts the infected hosts off.",
            ))
            .with_line(Line::success(
                "Evidence is preserved for forensics and the spread is contained.",
            ))
            .with_line(Line::info("+50 points for a balanced response")),
    )
    .with_option(
        "Wait until morning when the full team is available",
        Effect::new()
            .with_score(-50)
            .with_reputation(-40)
            .with_minutes(300)
            .with_containment(0)
            .with_systems_affected(200)
            .with_line(Line::danger("DISASTER. By morning, 200+ systems are encrypted."))
            .with_line(Line::danger(
                "Critical business data is lost. Recovery will be a long road.",
            ))
            .with_line(Line::danger(
                "-50 points and -40 reputation for the delayed response",
            )),
    )
}

fn communication() -> ScenarioDefinition {
    ScenarioDefinition::new(
        "communication",
        "SCENARIO 2: COMMUNICATION CRISIS",
        "Communication",
        "The incident is partially contained and your phone will not stop ringing.\n\
         The CEO, the CISO, legal and PR all want updates, and the media has\n\
         somehow caught wind of the situation.\n\n\
         Customers and regulators may also need to be notified.",
    )
    .with_question("Who do you notify FIRST?")
    .with_option(
        "Alert the executive team and legal counsel immediately",
        Effect::new()
            .with_score(40)
            .with_reputation(10)
            .with_minutes(15)
            .with_line(Line::success(
                "Smart move. Legal counsel steers you through the compliance requirements.",
            ))
            .with_line(Line::success(
                "The executive team lines up resources behind your response.",
            ))
            .with_line(Line::info("+40 points and +10 reputation for proper escalation")),
    )
    .with_option(
        "Focus on technical remediation first, communicate later",
        Effect::new()
            .with_score(20)
            .with_reputation(-20)
            .with_minutes(5)
            .with_line(Line::warning(
                "Technical progress is good, but stakeholders are left in the dark.",
            ))
            .with_line(Line::warning("Delayed notification may carry legal consequences."))
            .with_line(Line::info(
                "+20 points for focus, -20 reputation for poor communication",
            )),
    )
    .with_option(
        "Contact law enforcement and regulatory bodies right away",
        Effect::new()
            .with_score(35)
            .with_reputation(5)
            .with_minutes(30)
            .with_line(Line::success(
                "Law enforcement is engaged and regulatory deadlines are met.",
            ))
            .with_line(Line::warning("The executive team, however, feels blindsided."))
            .with_line(Line::info("+35 points and +5 reputation")),
    )
    .with_option(
        "Prepare a public statement to get ahead of the story",
        Effect::new()
            .with_score(-20)
            .with_reputation(-30)
            .with_minutes(45)
            .with_line(Line::danger("The premature public statement backfires."))
            .with_line(Line::danger(
                "Without legal review, the company is now exposed to liability.",
            ))
            .with_line(Line::danger("The stock drops 15% on the news."))
            .with_line(Line::danger("-20 points and -30 reputation")),
    )
}

fn ransom() -> ScenarioDefinition {
    ScenarioDefinition::new(
        "ransom",
        "SCENARIO 3: THE RANSOM DEMAND",
        "Ransom",
        "A ransom note appears on every encrypted system:\n\n\
         'Your files are encrypted. Pay 50 Bitcoin ($2.1M USD) within 48 hours\n\
         or the decryption key will be destroyed. We have exfiltrated your data\n\
         and will publish it if you involve law enforcement.'\n\n\
         The backups were hit too. Only 60% of the data can be restored.\n\
         The executive team wants your recommendation.",
    )
    .with_question("What do you recommend?")
    .with_option(
        "Pay the ransom immediately to minimize downtime",
        Effect::new()
            .with_score(-30)
            .with_reputation(-25)
            .with_minutes(20)
            .with_line(Line::warning("The ransom is paid... and then the problems start."))
            .with_line(Line::danger(
                "The decryption key is faulty. Only 40% of files come back.",
            ))
            .with_line(Line::danger(
                "You funded a criminal operation and still lost most of the data.",
            ))
            .with_line(Line::danger("The board questions your judgment."))
            .with_line(Line::danger("-30 points and -25 reputation")),
    )
    .with_option(
        "Refuse to pay, restore from backups, and rebuild compromised systems",
        Effect::new()
            .with_score(50)
            .with_reputation(15)
            .with_minutes(120)
            .with_line(Line::success("Excellent. You refuse to negotiate with criminals."))
            .with_line(Line::success(
                "It takes five days, but 60% of the data is restored from backups.",
            ))
            .with_line(Line::success(
                "The rest is rebuilt from scratch with hardened configurations.",
            ))
            .with_line(Line::success(
                "The company takes a strong public stance against ransomware.",
            ))
            .with_line(Line::info("+50 points and +15 reputation for an ethical response")),
    )
    .with_option(
        "Negotiate with attackers while preparing recovery options",
        Effect::new()
            .with_score(10)
            .with_reputation(-5)
            .with_minutes(60)
            .with_line(Line::warning(
                "Negotiation buys time while the recovery work continues.",
            ))
            .with_line(Line::success("In the end you restore from backups without paying."))
            .with_line(Line::warning(
                "The tactics were risky and ethically questionable.",
            ))
            .with_line(Line::info("+10 points, -5 reputation")),
    )
    .with_option(
        "Engage a specialized incident response firm to handle this",
        Effect::new()
            .with_score(60)
            .with_reputation(20)
            .with_minutes(30)
            .with_line(Line::success(
                "OUTSTANDING. The IR firm brings expertise and extra hands.",
            ))
            .with_line(Line::success(
                "They identify the ransomware variant and find a working decryptor.",
            ))
            .with_line(Line::success("70% of the data is recovered without paying."))
            .with_line(Line::success(
                "Their forensic analysis shows how the attackers got in.",
            ))
            .with_line(Line::info("+60 points and +20 reputation for bringing in experts")),
    )
}

fn prevention() -> ScenarioDefinition {
    ScenarioDefinition::new(
        "prevention",
        "SCENARIO 4: ROOT CAUSE ANALYSIS",
        "Prevention",
        "The immediate crisis is over. Now you need to understand how it happened.\n\n\
         Forensics points to three possible entry points:\n\
         A) A phishing email opened by someone in accounting\n\
         B) An unpatched VPN server with a known vulnerability\n\
         C) Compromised third-party vendor credentials\n\n\
         This must not happen again.",
    )
    .with_question("What is your remediation priority?")
    .with_option(
        "Implement comprehensive security awareness training for all staff",
        Effect::new()
            .with_score(25)
            .with_minutes(45)
            .with_line(Line::success("Security awareness training launches company-wide."))
            .with_line(Line::warning("The technical vulnerabilities remain open."))
            .with_line(Line::info("+25 points - good but incomplete")),
    )
    .with_option(
        "Accelerate patch management and vulnerability scanning programs",
        Effect::new()
            .with_score(25)
            .with_minutes(45)
            .with_line(Line::success("Patch management improves across the estate."))
            .with_line(Line::warning("People are still the weakest link."))
            .with_line(Line::info("+25 points - good but incomplete")),
    )
    .with_option(
        "Review and strengthen all third-party vendor security controls",
        Effect::new()
            .with_score(25)
            .with_minutes(45)
            .with_line(Line::success("New vendor controls close the third-party gap."))
            .with_line(Line::warning("Internal weaknesses are still there."))
            .with_line(Line::info("+25 points - good but incomplete")),
    )
    .with_option(
        "Implement all of the above with a phased security improvement plan",
        Effect::new()
            .with_score(70)
            .with_reputation(25)
            .with_minutes(120)
            .with_line(Line::success(
                "EXCEPTIONAL. You deliver a comprehensive security improvement plan.",
            ))
            .with_line(Line::success("Every attack vector is covered by layered defenses:"))
            .with_line(Line::info("  - Monthly security awareness training"))
            .with_line(Line::info("  - Patches applied within 48 hours of release"))
            .with_line(Line::info("  - Third-party security assessments and monitoring"))
            .with_line(Line::info("  - Stronger detection and response capabilities"))
            .with_line(Line::success(
                "The board approves a bigger security budget on your recommendation.",
            ))
            .with_line(Line::info("+70 points and +25 reputation for a comprehensive approach")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    type Row = (i64, i64, u32, Option<u32>, Option<u32>);

    const TABLE: [[Row; 4]; 4] = [
        [
            (30, -10, 5, Some(60), None),
            (10, 0, 25, Some(20), Some(50)),
            (50, 0, 10, Some(80), None),
            (-50, -40, 300, Some(0), Some(200)),
        ],
        [
            (40, 10, 15, None, None),
            (20, -20, 5, None, None),
            (35, 5, 30, None, None),
            (-20, -30, 45, None, None),
        ],
        [
            (-30, -25, 20, None, None),
            (50, 15, 120, None, None),
            (10, -5, 60, None, None),
            (60, 20, 30, None, None),
        ],
        [
            (25, 0, 45, None, None),
            (25, 0, 45, None, None),
            (25, 0, 45, None, None),
            (70, 25, 120, None, None),
        ],
    ];

    #[test]
    fn shift_order_is_fixed() {
        let ids: Vec<_> = standard_shift().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["detection", "communication", "ransom", "prevention"]);
    }

    #[test]
    fn effect_table_matches() {
        for (scenario, rows) in standard_shift().iter().zip(TABLE) {
            assert_eq!(scenario.option_count(), 4, "{}", scenario.id);
            for (option, row) in scenario.options.iter().zip(rows) {
                let e = &option.effect;
                let actual = (
                    e.score_delta,
                    e.reputation_delta,
                    e.time_delta,
                    e.containment_set,
                    e.systems_affected_set,
                );
                assert_eq!(actual, row, "{}: {}", scenario.id, option.label);
            }
        }
    }

    #[test]
    fn only_first_scenario_overwrites() {
        for scenario in standard_shift().iter().skip(1) {
            for option in &scenario.options {
                assert!(option.effect.containment_set.is_none());
                assert!(option.effect.systems_affected_set.is_none());
            }
        }
    }

    #[test]
    fn every_option_has_narrative() {
        for scenario in standard_shift() {
            assert!(!scenario.question.is_empty());
            for option in &scenario.options {
                assert!(!option.effect.narrative.is_empty(), "{}", option.label);
            }
        }
    }
}
