use super::{actions::FormCommand, state::FormState};

pub fn apply_command(state: &mut FormState, command: FormCommand) {
    match command {
        FormCommand::FocusNextField => state.focus_next_field(),
        FormCommand::FocusPrevField => state.focus_prev_field(),
        FormCommand::FieldStep(delta) => state.step_focus(delta),
        FormCommand::ClearForm => state.reset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field_definitions;

    #[test]
    fn field_step_moves_by_delta() {
        let mut state = FormState::from_definitions(&field_definitions());
        apply_command(&mut state, FormCommand::FieldStep(2));
        assert_eq!(state.focus_index(), 2);
        apply_command(&mut state, FormCommand::FocusPrevField);
        assert_eq!(state.focus_index(), 1);
        apply_command(&mut state, FormCommand::ClearForm);
        assert_eq!(state.focus_index(), 0);
    }
}
