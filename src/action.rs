#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  CancelInput,
  ConfirmNo,
  ConfirmYes,
  Delete,
  EditFilter,
  EditLimit,
  Endorse,
  FeelingLucky,
  FetchUploadUrl,
  HideHelp,
  NextField,
  None,
  OpenContact,
  OpenLink,
  OpenLogin,
  PreviousField,
  Quit,
  Refresh,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  Submit,
  SwitchTabLeft,
  SwitchTabRight,
}
