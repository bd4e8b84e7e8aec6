//! End-to-end Session Tests
//!
//! Plays the login story through the same events the UI produces.

#[cfg(test)]
mod tests {
    use crate::dnd::{DropEvent, DroppableId};
    use crate::field::FieldKey;
    use crate::hint::Hint;
    use crate::scenario::{Campaign, Scenario};
    use crate::scenarios::{login_story, LOGIN_CRITERIA};
    use crate::session::{Effect, GameEvent, GameHooks, Session};

    #[derive(Default)]
    struct Recorder {
        proceeded: Vec<String>,
        hints: Vec<Hint>,
    }

    impl GameHooks for Recorder {
        fn on_proceed(&mut self, scenario: &Scenario) {
            self.proceeded.push(scenario.id.clone());
        }

        fn on_hint(&mut self, hint: &Hint) {
            self.hints.push(hint.clone());
        }
    }

    fn drag(group: FieldKey, index: usize) -> GameEvent {
        GameEvent::Drop(DropEvent::palette_to_field(group, index, group))
    }

    fn select(key: FieldKey, value: &str) -> GameEvent {
        GameEvent::Select { key, value: Some(value.to_string()) }
    }

    /// Every field of the login story except priority
    fn login_moves() -> Vec<GameEvent> {
        vec![
            drag(FieldKey::Title, 0),
            drag(FieldKey::Labels, 0),
            drag(FieldKey::Description, 0),
            drag(FieldKey::AcceptanceCriteria, 0),
            drag(FieldKey::Parent, 0),
            drag(FieldKey::Related, 0),
            select(FieldKey::AssignedTo, "John Doe"),
            select(FieldKey::State, "New"),
            select(FieldKey::Area, "Frontend"),
            select(FieldKey::Reason, "New Feature"),
            select(FieldKey::Iteration, "Sprint 1"),
            select(FieldKey::StoryPoints, "5"),
        ]
    }

    #[test]
    fn test_login_story_complete() {
        let mut session = Session::new(login_story());
        let mut hooks = Recorder::default();
        for event in login_moves() {
            session.dispatch(event, &mut hooks);
        }
        session.dispatch(select(FieldKey::Priority, "2"), &mut hooks);

        assert_eq!(session.value(FieldKey::Title), "Implement login functionality");
        assert_eq!(session.value(FieldKey::Labels), "Feature");
        assert_eq!(session.value(FieldKey::AcceptanceCriteria), LOGIN_CRITERIA);
        assert!(session.all_correct());
        assert!(session.solved_once());
        assert!(hooks.proceeded.is_empty());

        session.dispatch(GameEvent::Proceed, &mut hooks);
        assert_eq!(hooks.proceeded, vec!["login-story".to_string()]);
        session.dispatch(GameEvent::Proceed, &mut hooks);
        assert_eq!(hooks.proceeded.len(), 2);
    }

    #[test]
    fn test_login_story_missing_priority() {
        let mut session = Session::new(login_story());
        let mut hooks = Recorder::default();
        for event in login_moves() {
            session.dispatch(event, &mut hooks);
        }

        assert!(!session.all_correct());
        session.dispatch(GameEvent::Proceed, &mut hooks);
        assert!(hooks.proceeded.is_empty());

        session.dispatch(GameEvent::Hint, &mut hooks);
        assert_eq!(hooks.hints.len(), 1);
        assert_eq!(hooks.hints[0].field, Some(FieldKey::Priority));
    }

    #[test]
    fn test_ignored_drops_keep_card() {
        let mut session = Session::new(login_story());
        session.apply(drag(FieldKey::Title, 0));
        let before = session.state().clone();

        let ignored = [
            DropEvent::new(DroppableId::Palette(FieldKey::Labels), 1, None),
            DropEvent::new(
                DroppableId::Field(FieldKey::Title),
                0,
                Some(DroppableId::Field(FieldKey::Related)),
            ),
            DropEvent::new(
                DroppableId::Field(FieldKey::Title),
                0,
                Some(DroppableId::Palette(FieldKey::Title)),
            ),
            DropEvent::palette_to_field(FieldKey::Title, 42, FieldKey::Title),
        ];
        for event in ignored {
            assert_eq!(session.apply(GameEvent::Drop(event)), None);
            assert_eq!(session.state(), &before);
        }
    }

    #[test]
    fn test_breaking_a_field_locks_proceed_again() {
        let mut session = Session::new(login_story());
        for event in login_moves() {
            session.apply(event);
        }
        session.apply(select(FieldKey::Priority, "2"));
        assert!(matches!(session.proceed(), Some(Effect::Proceed { .. })));

        session.apply(drag(FieldKey::Related, 1));
        assert!(!session.all_correct());
        assert_eq!(session.apply(GameEvent::Proceed), None);

        session.apply(drag(FieldKey::Related, 0));
        assert!(session.all_correct());
    }

    #[test]
    fn test_campaign_walkthrough() {
        let campaign = Campaign::builtin();
        let mut index = 0;
        let mut visited = Vec::new();
        loop {
            let scenario = campaign.get(index).unwrap().clone();
            let mut session = Session::new(scenario);
            let answers: Vec<_> = session
                .scenario()
                .correct()
                .iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect();
            for (key, value) in answers {
                session.set_field(key, Some(&value));
            }
            let Some(Effect::Proceed { scenario_id }) = session.apply(GameEvent::Proceed) else {
                panic!("level {index} did not unlock proceed");
            };
            visited.push(scenario_id);
            match campaign.next_after(index) {
                Some(next) => index = next,
                None => break,
            }
        }
        assert_eq!(visited, vec!["login-story", "dashboard-story", "payment-bug"]);
    }
}
