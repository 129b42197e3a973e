use super::*;

pub(crate) enum Mode {
  Browse,
  Confirm(Confirm),
  Contact(ContactView),
  Prompt(Prompt),
}

impl Mode {
  fn edit(buffer: Option<&mut String>, key: KeyEvent) -> Action {
    let Some(buffer) = buffer else {
      return Action::None;
    };

    match key.code {
      KeyCode::Backspace => {
        buffer.pop();
      }
      KeyCode::Char(ch)
        if !key
          .modifiers
          .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
      {
        buffer.push(ch);
      }
      _ => {}
    }

    Action::None
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Action {
    match self {
      Mode::Browse => match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Left | KeyCode::Char('h') => Action::SwitchTabLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::SwitchTabRight,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Home => Action::SelectFirst,
        KeyCode::End => Action::SelectLast,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('n') => Action::EditLimit,
        KeyCode::Char('g') => Action::EditFilter,
        KeyCode::Char('d') => Action::Delete,
        KeyCode::Char('+') => Action::Endorse,
        KeyCode::Char('o' | 'O') | KeyCode::Enter => Action::OpenLink,
        KeyCode::Char('a') => Action::OpenLogin,
        KeyCode::Char('u') => Action::FetchUploadUrl,
        KeyCode::Char('c') => Action::OpenContact,
        KeyCode::Char('f') => Action::FeelingLucky,
        _ => Action::None,
      },
      Mode::Confirm(_) => match key.code {
        KeyCode::Char('y' | 'Y') => Action::ConfirmYes,
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Action::ConfirmNo,
        _ => Action::None,
      },
      Mode::Contact(view) => match key.code {
        KeyCode::Esc => Action::CancelInput,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab => Action::NextField,
        KeyCode::BackTab => Action::PreviousField,
        _ => Self::edit(view.focused_field(), key),
      },
      Mode::Prompt(prompt) => match key.code {
        KeyCode::Esc => Action::CancelInput,
        KeyCode::Enter => Action::Submit,
        _ => Self::edit(Some(&mut prompt.buffer), key),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn browse_keys_map_to_actions() {
    let mut mode = Mode::Browse;

    assert_eq!(mode.handle_key(press(KeyCode::Char('d'))), Action::Delete);
    assert_eq!(mode.handle_key(press(KeyCode::Char('r'))), Action::Refresh);
    assert_eq!(mode.handle_key(press(KeyCode::Esc)), Action::Quit);
  }

  #[test]
  fn prompt_edits_its_buffer() {
    let mut mode = Mode::Prompt(Prompt {
      buffer: "1".to_string(),
      message_backup: String::new(),
      name: "max-comments".to_string(),
      tab_index: 0,
      target: PromptTarget::Limit,
    });

    mode.handle_key(press(KeyCode::Char('0')));
    mode.handle_key(press(KeyCode::Char('5')));
    mode.handle_key(press(KeyCode::Backspace));

    assert_eq!(
      mode.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
      Action::None
    );

    let Mode::Prompt(prompt) = &mode else {
      panic!("mode changed");
    };

    assert_eq!(prompt.buffer, "10");
    assert_eq!(mode.handle_key(press(KeyCode::Enter)), Action::Submit);
  }

  #[test]
  fn contact_form_typing_stays_in_the_form() {
    let mut mode = Mode::Contact(ContactView::default());

    assert_eq!(mode.handle_key(press(KeyCode::Char('q'))), Action::None);
    assert_eq!(mode.handle_key(press(KeyCode::Tab)), Action::NextField);

    let Mode::Contact(view) = &mode else {
      panic!("mode changed");
    };

    assert_eq!(view.form.first_name, "q");
  }

  #[test]
  fn confirm_accepts_only_yes_or_no() {
    let mut mode = Mode::Confirm(Confirm {
      key: "1".to_string(),
      message_backup: String::new(),
      tab_index: 2,
      title: "Hello".to_string(),
    });

    assert_eq!(mode.handle_key(press(KeyCode::Char('x'))), Action::None);
    assert_eq!(mode.handle_key(press(KeyCode::Char('y'))), Action::ConfirmYes);
    assert_eq!(mode.handle_key(press(KeyCode::Esc)), Action::ConfirmNo);
  }
}
