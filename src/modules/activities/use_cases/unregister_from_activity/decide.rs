use crate::modules::activities::core::{
    activity::Activity,
    decision::{DecideError, Decision},
    events::ActivityEvent,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(activity: &Activity, command: UnregisterFromActivity) -> Decision {
    if !activity.has_participant(&command.participant) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered,
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantUnregistered {
            activity_name: command.activity_name,
            participant: command.participant,
        }],
    }
}
