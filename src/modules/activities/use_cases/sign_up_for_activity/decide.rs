use crate::modules::activities::core::{
    activity::Activity,
    decision::{DecideError, Decision},
    events::ActivityEvent,
};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(activity: &Activity, command: SignUpForActivity) -> Decision {
    if activity.has_participant(&command.participant) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantSignedUp {
            activity_name: command.activity_name,
            participant: command.participant,
        }],
    }
}
