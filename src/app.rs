use super::*;

pub(crate) struct App {
  client: Client<HttpTransport>,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  const CHART_HEIGHT: u16 = 12;

  fn chart(elements: &[Element]) -> BarChart {
    let bars = elements
      .iter()
      .map(|element| {
        Bar::default()
          .label(Line::from(truncate(&element.title, 10)))
          .value(element.votes.unwrap_or(0))
          .style(Style::default().fg(Color::Cyan))
      })
      .collect::<Vec<_>>();

    BarChart::default()
      .block(Block::default().borders(Borders::BOTTOM))
      .bar_width(10)
      .bar_gap(2)
      .value_style(
        Style::default()
          .fg(Color::Black)
          .bg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .data(BarGroup::default().bars(&bars))
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let active_tab = self.state.active_tab();

    let tab_titles = self
      .state
      .tabs()
      .iter()
      .map(|tab| Line::from(tab.title()))
      .collect::<Vec<_>>();

    let tabs_widget = Tabs::new(tab_titles)
      .select(active_tab)
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[0]);

    if let Some(authentication) = self.state.authentication() {
      frame.render_widget(
        Paragraph::new(format!("a {}", authentication.authentication_action))
          .style(Style::default().fg(Color::DarkGray))
          .alignment(Alignment::Right),
        layout[0],
      );
    }

    let Some(tab) = self.state.tabs().get(active_tab) else {
      return;
    };

    let list_area = if tab.feed.view == View::Chart && !tab.view.is_empty() {
      let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(Self::CHART_HEIGHT), Constraint::Min(0)])
        .split(layout[1]);

      frame.render_widget(Self::chart(tab.view.items()), areas[0]);

      areas[1]
    } else {
      layout[1]
    };

    let list_items = if tab.view.is_empty() {
      let text = if tab.loading {
        LOADING_STATUS
      } else {
        "Nothing to show yet. Press r to refresh."
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      tab
        .view
        .items()
        .iter()
        .map(|element| Self::list_item(element, list_area.width))
        .collect()
    };

    let mut list_state = ListState::default()
      .with_selected(tab.view.selected_index())
      .with_offset(tab.view.offset());

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, list_area, &mut list_state);

    self.state.set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    if let Mode::Contact(view) = self.state.mode() {
      view.draw(frame);
    }

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::Delete {
        feed,
        inputs,
        key,
        tab_index,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let mut staged = Vec::new();

          let result = feed
            .delete(&client, &mut staged, key.as_deref(), &inputs)
            .await
            .map(|()| staged);

          let _ = sender.send(Event::Items {
            operation: Operation::Delete,
            result,
            tab_index,
          });
        });
      }
      Effect::Endorse {
        feed,
        inputs,
        skill,
        tab_index,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let mut staged = Vec::new();

          let result = feed
            .endorse(&client, &mut staged, &skill, &inputs)
            .await
            .map(|()| staged);

          let _ = sender.send(Event::Items {
            operation: Operation::Endorse,
            result,
            tab_index,
          });
        });
      }
      Effect::Load {
        feed,
        inputs,
        tab_index,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Items {
            operation: Operation::Load,
            result: feed.load(&client, &inputs).await,
            tab_index,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          tracing::warn!(%url, %error, "could not open browser");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
      Effect::SendMessage { form } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::MessageSent {
            result: client.submit_message(&form).await,
          });
        });
      }
      Effect::UploadUrl => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::UploadUrl {
            result: client.upload_url().await,
          });
        });
      }
    }
  }

  fn list_item(element: &Element, available_width: u16) -> ListItem {
    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(element.title.clone(), Style::default().fg(Color::White)),
    ])];

    if let Some(detail) = &element.detail {
      let wrap_width = usize::from(available_width)
        .saturating_sub(BASE_INDENT.chars().count())
        .max(1);

      for line in wrap_text(detail, wrap_width) {
        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(line, Style::default().fg(Color::DarkGray)),
        ]));
      }
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  /// Runs the first fetch-render cycle of every feed concurrently.
  pub(crate) async fn load_tabs<T: Transport>(
    client: &Client<T>,
    feeds: Vec<Feed>,
  ) -> Vec<(Tab, Option<FetchError>)> {
    let results = join_all(feeds.iter().map(|feed| {
      let inputs = Inputs::default();
      async move { feed.load(client, &inputs).await }
    }))
    .await;

    feeds
      .into_iter()
      .zip(results)
      .map(|(feed, result)| {
        let mut tab = Tab::new(feed);

        match result {
          Ok(elements) => {
            tab.view.render(elements);
            (tab, None)
          }
          Err(error) => {
            tracing::warn!(
              feed = %tab.feed.label,
              kind = error.kind(),
              %error,
              "initial load failed"
            );
            (tab, Some(error))
          }
        }
      })
      .collect()
  }

  pub(crate) fn new(
    client: Client<HttpTransport>,
    config: &Config,
    tabs: Vec<(Tab, Option<FetchError>)>,
    authentication: Option<Authentication>,
  ) -> Result<Self> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let state = State::new(config, config.base_url()?, tabs, authentication)?;

    Ok(Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    })
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);

      for effect in self.state.take_pending_effects() {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let action = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.mode_mut().handle_key(key)
      };

      match self.state.dispatch(action) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          tracing::warn!(%error, "action failed");
          self.state.take_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }
}
