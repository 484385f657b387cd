//! Canned recommendation texts.
//!
//! Maslach and Boyko select a single class (the overall verdict, the
//! indicator phase) and look its text up here. Heck-Hess and Quick carry their
//! accumulated blocks inside the result record instead.

use burncheck_core::models::{MaslachVerdict, Phase, ResultRecord};

pub fn maslach(verdict: MaslachVerdict) -> &'static [&'static str] {
    match verdict {
        MaslachVerdict::Critical => &[
            "Talk to a psychologist or psychotherapist as soon as you can",
            "Discuss an immediate workload reduction with your manager",
            "Plan real time off: at least two weeks without work chat",
            "Drop on-call duties and overtime until you recover",
        ],
        MaslachVerdict::Elevated => &[
            "Set a hard stop for your workday and keep it",
            "Move repetitive tasks into automation or share them with the team",
            "Schedule regular breaks away from the screen",
            "Bring up your workload at your next one-on-one",
        ],
        MaslachVerdict::Normal => &[
            "Keep your current balance between work and rest",
            "Retake the questionnaire every one or two months",
        ],
    }
}

pub fn boyko(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Tension => &[
            "Break large tasks into small, finishable steps",
            "Negotiate realistic deadlines instead of absorbing the pressure",
            "Use a fixed ritual to close the workday",
        ],
        Phase::Resistance => &[
            "Reconnect with the parts of the job you used to enjoy",
            "Pair with a colleague on a task you find meaningful",
            "Notice cynical reactions and ask what need is behind them",
        ],
        Phase::Exhaustion => &[
            "Prioritize sleep and physical activity over extra hours",
            "Take a vacation that fully disconnects you from work",
            "Get a medical check-up: eyes, posture, nervous system",
        ],
        Phase::Deformation => &[
            "Talk to a specialist; this stage rarely resolves on its own",
            "Consider a change of project, team or role",
            "Rebuild contact with users to see the impact of your work",
        ],
    }
}

/// Extra advice shown when a result crosses its follow-up threshold: Boyko
/// above 50%, Heck-Hess above 12 points, Quick above 20 points.
pub fn follow_up(record: &ResultRecord) -> Option<&'static [&'static str]> {
    match record {
        ResultRecord::Boyko { scores, .. } if scores.total_percentage > 50.0 => Some(&[
            "Discuss your workload and deadlines with your manager",
            "Get a medical check-up: eyesight, posture, nervous system",
            "Take a vacation to fully rest from the computer",
            "See a psychologist who works with IT professionals",
        ]),
        ResultRecord::HeckHess { scores } if scores.total_score > 12 => Some(&[
            "Set up gadget-free days",
            "Practice deep work with a single focus",
            "Use social media blockers while working",
            "Take regular breaks for your eyes and posture",
            "Consider working with a therapist who knows the IT field",
        ]),
        ResultRecord::Quick { scores } if scores.total > 20 => Some(&[
            "Schedule a regular digital detox",
            "Follow the 20-20-20 rule: every 20 minutes look 20 feet away for 20 seconds",
            "Use time management techniques such as Pomodoro or time blocking",
            "Exercise regularly to offset sitting all day",
        ]),
        _ => None,
    }
}

pub fn general_prevention() -> &'static [&'static str] {
    &[
        "Set boundaries for your working time",
        "Take regular breaks (the 20-20-20 rule)",
        "Exercise regularly",
        "Develop hobbies outside of work",
        "Keep in touch with colleagues and friends",
        "Protect your sleep",
        "Say no to tasks that do not fit your capacity",
        "Retake a questionnaire every one or two months to track the trend",
    ]
}
