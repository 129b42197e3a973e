use super::*;

/// Overlay for writing a message through the contact form.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContactView {
  pub(crate) focus: usize,
  pub(crate) form: ContactForm,
  pub(crate) message_backup: String,
}

impl ContactView {
  const TITLE: &str = "Contact";

  const WIDTH: usize = 60;

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let label_width = ContactForm::LABELS
      .iter()
      .map(|label| label.len())
      .max()
      .unwrap_or(0);

    let mut lines = Vec::new();

    for (index, (label, value)) in ContactForm::LABELS
      .iter()
      .zip(self.form.fields())
      .enumerate()
    {
      let focused = index == self.focus;

      let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::White)
      };

      let value_width = Self::WIDTH.saturating_sub(label_width + 6);

      let mut shown = truncate(value, value_width);

      if focused {
        shown.push('▏');
      }

      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(format!("{label:>label_width$}: "), style),
        Span::raw(shown),
      ]));
    }

    lines.push(Line::from(""));

    lines.push(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        self.form.check().to_string(),
        Style::default().fg(Color::DarkGray),
      ),
    ]));

    let area = centered_area(frame.area(), Self::WIDTH, lines.len() + 2);

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(lines)
        .block(Block::default().title(Self::TITLE).borders(Borders::ALL)),
      area,
    );
  }

  pub(crate) fn focus_next(&mut self) {
    self.focus = (self.focus + 1) % ContactForm::LABELS.len();
  }

  pub(crate) fn focus_previous(&mut self) {
    let count = ContactForm::LABELS.len();
    self.focus = (self.focus + count - 1) % count;
  }

  pub(crate) fn focused_field(&mut self) -> Option<&mut String> {
    self.form.field_mut(self.focus)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn focus_wraps_in_both_directions() {
    let mut view = ContactView::default();

    view.focus_previous();
    assert_eq!(view.focus, 4);

    view.focus_next();
    assert_eq!(view.focus, 0);
  }

  #[test]
  fn typing_goes_to_the_focused_field() {
    let mut view = ContactView::default();

    view.focus_next();
    view.focus_next();
    view.focused_field().unwrap().push_str("ada@example.com");

    assert_eq!(view.form.email, "ada@example.com");
  }
}
