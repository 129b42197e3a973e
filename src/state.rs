use {super::*, reqwest::Url};

pub(crate) struct State {
  active_tab: usize,
  authentication: Option<Authentication>,
  base_url: Url,
  contact_path: String,
  help: HelpView,
  lucky: RandomChoice<String>,
  lucky_page: String,
  message: String,
  mode: Mode,
  pending_effects: Vec<Effect>,
  tabs: Vec<Tab>,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn active(&self) -> Option<&Tab> {
    self.tabs.get(self.active_tab)
  }

  fn active_mut(&mut self) -> Option<&mut Tab> {
    self.tabs.get_mut(self.active_tab)
  }

  pub(crate) fn active_tab(&self) -> usize {
    self.active_tab
  }

  pub(crate) fn authentication(&self) -> Option<&Authentication> {
    self.authentication.as_ref()
  }

  fn cancel_input(&mut self) {
    match std::mem::replace(&mut self.mode, Mode::Browse) {
      Mode::Contact(view) => self.message = view.message_backup,
      Mode::Prompt(prompt) => self.message = prompt.message_backup,
      Mode::Confirm(confirm) => self.message = confirm.message_backup,
      Mode::Browse => {}
    }
  }

  fn confirm_delete(&mut self, confirmed: bool) {
    let Mode::Confirm(confirm) = std::mem::replace(&mut self.mode, Mode::Browse)
    else {
      return;
    };

    self.message = confirm.message_backup;

    if confirmed {
      self.start_delete(confirm.tab_index, Some(confirm.key));
    } else {
      self.set_transient_message(format!("Kept \"{}\"", confirm.title));
    }
  }

  fn delete(&mut self) {
    let Some(tab) = self.active() else {
      return;
    };

    let (label, needs_confirmation) =
      (tab.feed.label.clone(), tab.feed.needs_confirmation());

    match &tab.feed.mutation {
      None => {
        self.set_transient_message(format!("Nothing can be deleted in {label}"));
      }
      Some(Mutation::DeleteAll { .. }) => {
        self.start_delete(self.active_tab, None);
      }
      Some(Mutation::DeleteSelected { .. }) => {
        let Some(element) = tab.view.selected_item() else {
          self.set_transient_message(format!("Select an item in {label} first"));
          return;
        };

        let Some(key) = element.key.clone() else {
          self.set_transient_message(format!(
            "\"{}\" cannot be deleted",
            truncate(&element.title, 40)
          ));
          return;
        };

        let title = truncate(&element.title, 40);

        if needs_confirmation {
          let confirm = Confirm {
            key,
            message_backup: self.message.clone(),
            tab_index: self.active_tab,
            title,
          };

          self.message = confirm.text();
          self.mode = Mode::Confirm(confirm);
        } else {
          self.start_delete(self.active_tab, Some(key));
        }
      }
    }
  }

  pub(crate) fn dispatch(&mut self, action: Action) -> Result<Dispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match action {
      Action::CancelInput => self.cancel_input(),
      Action::ConfirmNo => self.confirm_delete(false),
      Action::ConfirmYes => self.confirm_delete(true),
      Action::Delete => self.delete(),
      Action::EditFilter => self.edit(PromptTarget::Filter),
      Action::EditLimit => self.edit(PromptTarget::Limit),
      Action::Endorse => self.endorse(),
      Action::FeelingLucky => self.feeling_lucky()?,
      Action::FetchUploadUrl => {
        self.message = "Requesting an upload URL...".into();
        self.pending_effects.push(Effect::UploadUrl);
      }
      Action::HideHelp => self.help.hide(&mut self.message),
      Action::NextField => {
        if let Mode::Contact(view) = &mut self.mode {
          view.focus_next();
        }
      }
      Action::None => {}
      Action::OpenContact => self.open_contact(),
      Action::OpenLink => self.open_link()?,
      Action::OpenLogin => self.open_login()?,
      Action::PreviousField => {
        if let Mode::Contact(view) = &mut self.mode {
          view.focus_previous();
        }
      }
      Action::Quit => should_exit = true,
      Action::Refresh => self.start_load(self.active_tab),
      Action::SelectFirst => self.select(ListView::select_first),
      Action::SelectLast => self.select(ListView::select_last),
      Action::SelectNext => self.select(ListView::select_next),
      Action::SelectPrevious => self.select(ListView::select_previous),
      Action::ShowHelp => self.help.show(&mut self.message),
      Action::Submit => self.submit(),
      Action::SwitchTabLeft => self.switch_tab(self.tabs.len().saturating_sub(1)),
      Action::SwitchTabRight => self.switch_tab(1),
    }

    Ok(Dispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  fn edit(&mut self, target: PromptTarget) {
    let Some(tab) = self.active() else {
      return;
    };

    let (parameter, current) = match target {
      PromptTarget::Filter => (&tab.feed.filter, &tab.inputs.filter),
      PromptTarget::Limit => (&tab.feed.limit, &tab.inputs.limit),
    };

    let Some(parameter) = parameter else {
      let kind = match target {
        PromptTarget::Filter => "filter",
        PromptTarget::Limit => "limit",
      };

      self.set_transient_message(format!(
        "{} has no {kind} to set",
        tab.feed.label
      ));

      return;
    };

    let prompt = Prompt {
      buffer: current.clone().unwrap_or_default(),
      message_backup: self.message.clone(),
      name: parameter.name.clone(),
      tab_index: self.active_tab,
      target,
    };

    self.message = prompt.text();
    self.mode = Mode::Prompt(prompt);
  }

  fn endorse(&mut self) {
    let Some(tab) = self.active() else {
      return;
    };

    if tab.feed.endorse.is_none() {
      self.set_transient_message(format!(
        "{} has nothing to endorse",
        tab.feed.label
      ));
      return;
    }

    let Some(skill) = tab.view.selected_item().map(|element| element.title.clone())
    else {
      self.set_transient_message(format!(
        "Select an item in {} first",
        tab.feed.label
      ));
      return;
    };

    let effect = Effect::Endorse {
      feed: tab.feed.clone(),
      inputs: tab.inputs.clone(),
      skill: skill.clone(),
      tab_index: self.active_tab,
    };

    if let Some(tab) = self.active_mut() {
      tab.loading = true;
    }

    self.message = format!("Endorsing {}...", truncate(&skill, 40));
    self.pending_effects.push(effect);
  }

  fn feeling_lucky(&mut self) -> Result {
    let anchor = self.lucky.pick().trim_start_matches('#').to_string();

    let mut url = self
      .base_url
      .join(&self.lucky_page)
      .with_context(|| format!("invalid lucky page `{}`", self.lucky_page))?;

    url.set_fragment(Some(&anchor));

    tracing::debug!(%url, "feeling lucky");

    self.pending_effects.push(Effect::OpenUrl {
      url: url.to_string(),
    });

    Ok(())
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Items {
        operation,
        result,
        tab_index,
      } => {
        let Some(tab) = self.tabs.get_mut(tab_index) else {
          return;
        };

        tab.loading = false;

        let label = tab.feed.label.clone();

        let message = match result {
          Ok(elements) => {
            let count = elements.len();
            tab.view.render(elements);
            operation.success(&label, count)
          }
          Err(error) => {
            tracing::warn!(
              feed = %label,
              ?operation,
              kind = error.kind(),
              %error,
              "fetch-render cycle failed"
            );

            operation.failure(&label, &error)
          }
        };

        if !self.help.is_visible() {
          self.set_transient_message(message);
        }
      }
      Event::MessageSent { result } => match result {
        Ok(()) => {
          tracing::info!("message sent");

          self.set_transient_message("Message sent".into());

          let refresh = self
            .tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.feed.path == self.contact_path)
            .map(|(index, _)| index)
            .collect::<Vec<_>>();

          for index in refresh {
            self.start_load(index);
          }
        }
        Err(error) => {
          tracing::warn!(kind = error.kind(), %error, "could not send message");
          self.set_transient_message(format!("Could not send message: {error}"));
        }
      },
      Event::UploadUrl { result } => match result {
        Ok(url) => {
          tracing::info!(%url, "received upload url");
          self.message = format!("Upload URL: {url}");
        }
        Err(error) => {
          tracing::warn!(kind = error.kind(), %error, "could not fetch upload url");
          self
            .set_transient_message(format!("Could not fetch upload URL: {error}"));
        }
      },
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(
    config: &Config,
    base_url: Url,
    tabs: Vec<(Tab, Option<FetchError>)>,
    authentication: Option<Authentication>,
  ) -> Result<Self> {
    let mut greetings = RandomChoice::new(config.greetings.clone())?;

    let mut state = Self {
      active_tab: 0,
      authentication,
      base_url,
      contact_path: config.contact_path.clone(),
      help: HelpView::new(),
      lucky: RandomChoice::new(config.lucky_posts.clone())?,
      lucky_page: config.lucky_page.clone(),
      message: LIST_STATUS.into(),
      mode: Mode::Browse,
      pending_effects: Vec::new(),
      tabs: Vec::with_capacity(tabs.len()),
      transient_message: None,
    };

    let mut failures = Vec::new();

    for (tab, error) in tabs {
      if let Some(error) = error {
        failures.push(format!("Could not load {}: {error}", tab.feed.label));
      }

      state.tabs.push(tab);
    }

    match failures.into_iter().next() {
      Some(failure) => state.set_transient_message(failure),
      None => state.set_transient_message(greetings.pick().clone()),
    }

    Ok(state)
  }

  fn open_contact(&mut self) {
    if matches!(self.mode, Mode::Contact(_)) {
      return;
    }

    let view = ContactView {
      message_backup: self.message.clone(),
      ..ContactView::default()
    };

    self.message = CONTACT_STATUS.into();
    self.mode = Mode::Contact(view);
  }

  fn open_link(&mut self) -> Result {
    let Some(link) = self
      .active()
      .and_then(|tab| tab.view.selected_item())
      .and_then(|element| element.link.clone())
    else {
      self.set_transient_message("Nothing to open".into());
      return Ok(());
    };

    let url = self.resolve(&link)?;

    self.pending_effects.push(Effect::OpenUrl { url });

    Ok(())
  }

  fn open_login(&mut self) -> Result {
    let Some(link) = self
      .authentication
      .as_ref()
      .map(|authentication| authentication.authentication_url.clone())
    else {
      self.set_transient_message("No login page available".into());
      return Ok(());
    };

    let url = self.resolve(&link)?;

    self.pending_effects.push(Effect::OpenUrl { url });

    Ok(())
  }

  fn resolve(&self, link: &str) -> Result<String> {
    Ok(
      self
        .base_url
        .join(link)
        .with_context(|| format!("invalid link `{link}`"))?
        .to_string(),
    )
  }

  fn select(&mut self, select: fn(&mut ListView<Element>)) {
    if let Some(tab) = self.active_mut() {
      select(&mut tab.view);
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if let Some(tab) = self.active_mut() {
      tab.view.set_offset(offset);
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let previous = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.previous().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), previous));

    self.message = message;
  }

  fn start_delete(&mut self, tab_index: usize, key: Option<String>) {
    let Some(tab) = self.tabs.get_mut(tab_index) else {
      return;
    };

    tab.loading = true;

    self.pending_effects.push(Effect::Delete {
      feed: tab.feed.clone(),
      inputs: tab.inputs.clone(),
      key,
      tab_index,
    });

    if !self.help.is_visible() {
      self.message = LOADING_STATUS.into();
    }
  }

  fn start_load(&mut self, tab_index: usize) {
    let Some(tab) = self.tabs.get_mut(tab_index) else {
      return;
    };

    tab.loading = true;

    self.pending_effects.push(Effect::Load {
      feed: tab.feed.clone(),
      inputs: tab.inputs.clone(),
      tab_index,
    });

    if !self.help.is_visible() {
      self.message = LOADING_STATUS.into();
    }
  }

  fn submit(&mut self) {
    match std::mem::replace(&mut self.mode, Mode::Browse) {
      Mode::Contact(view) => self.submit_contact(view),
      Mode::Prompt(prompt) => self.submit_prompt(prompt),
      mode => self.mode = mode,
    }
  }

  fn submit_contact(&mut self, view: ContactView) {
    if view.form.is_valid() {
      self.message = "Sending message...".into();
      self
        .pending_effects
        .push(Effect::SendMessage { form: view.form });
    } else {
      let check = view.form.check();
      self.transient_message = None;
      self.message = CONTACT_STATUS.into();
      self.set_transient_message(format!("Not sent: {check}"));
      self.mode = Mode::Contact(view);
    }
  }

  fn submit_prompt(&mut self, prompt: Prompt) {
    self.message = prompt.message_backup;

    let Some(tab) = self.tabs.get_mut(prompt.tab_index) else {
      return;
    };

    let mut inputs = tab.inputs.clone();

    let value = Some(prompt.buffer);

    match prompt.target {
      PromptTarget::Filter => inputs.filter = value,
      PromptTarget::Limit => inputs.limit = value,
    }

    if let Err(error) = tab.feed.query(&inputs) {
      self.set_transient_message(error.to_string());
      return;
    }

    tab.inputs = inputs;

    self.start_load(prompt.tab_index);
  }

  fn switch_tab(&mut self, step: usize) {
    let tab_count = self.tabs.len();

    if tab_count != 0 {
      self.active_tab = (self.active_tab + step) % tab_count;
    }
  }

  /// Effects raised while handling an event, such as the refresh that follows
  /// a sent message.
  pub(crate) fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn tabs(&self) -> &[Tab] {
    &self.tabs
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = &self.transient_message {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.previous().to_string();
        self.transient_message = None;
      }
    }
  }
}
