use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;

pub fn evolve(mut activity: Activity, event: &ActivityEvent) -> Activity {
    match event {
        ActivityEvent::ParticipantSignedUp { participant, .. } => {
            if !activity.has_participant(participant) {
                activity.participants.push(participant.clone());
            }
        }
        ActivityEvent::ParticipantUnregistered { participant, .. } => {
            activity.participants.retain(|p| p != participant);
        }
    }
    activity
}
