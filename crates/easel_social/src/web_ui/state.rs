//! Posting states.

/// Position in the web UI posting flow.
///
/// The flow is strictly linear; any state can drop to [`PublishState::Failed`].
///
/// # Examples
///
/// ```
/// use easel_social::PublishState;
///
/// assert_eq!(PublishState::Init.successor(), Some(PublishState::DriverReady));
/// assert_eq!(PublishState::Verified.successor(), None);
/// assert_eq!(PublishState::CaptionEntered.to_string(), "CAPTION_ENTERED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PublishState {
    /// Browser session exists, nothing loaded
    #[display("INIT")]
    Init,
    /// Login page loaded
    #[display("DRIVER_READY")]
    DriverReady,
    /// Credentials typed
    #[display("AUTHENTICATING")]
    Authenticating,
    /// Logged in, post-login dialogs handled
    #[display("AUTHENTICATED")]
    Authenticated,
    /// Post composer opened
    #[display("UPLOAD_STARTED")]
    UploadStarted,
    /// Image path handed to the file input
    #[display("FILE_SELECTED")]
    FileSelected,
    /// Crop step passed
    #[display("CROP_CONFIRMED")]
    CropConfirmed,
    /// Filter step passed
    #[display("FILTERS_CONFIRMED")]
    FiltersConfirmed,
    /// Caption typed
    #[display("CAPTION_ENTERED")]
    CaptionEntered,
    /// Share clicked
    #[display("SHARED")]
    Shared,
    /// Share control went away
    #[display("VERIFIED")]
    Verified,
    /// Gave up
    #[display("FAILED")]
    Failed,
}

impl PublishState {
    /// The happy-path order, `Init` through `Verified`.
    pub const PATH: [PublishState; 11] = [
        Self::Init,
        Self::DriverReady,
        Self::Authenticating,
        Self::Authenticated,
        Self::UploadStarted,
        Self::FileSelected,
        Self::CropConfirmed,
        Self::FiltersConfirmed,
        Self::CaptionEntered,
        Self::Shared,
        Self::Verified,
    ];

    /// Next state on success; `None` for terminal states.
    pub fn successor(self) -> Option<Self> {
        match self {
            Self::Init => Some(Self::DriverReady),
            Self::DriverReady => Some(Self::Authenticating),
            Self::Authenticating => Some(Self::Authenticated),
            Self::Authenticated => Some(Self::UploadStarted),
            Self::UploadStarted => Some(Self::FileSelected),
            Self::FileSelected => Some(Self::CropConfirmed),
            Self::CropConfirmed => Some(Self::FiltersConfirmed),
            Self::FiltersConfirmed => Some(Self::CaptionEntered),
            Self::CaptionEntered => Some(Self::Shared),
            Self::Shared => Some(Self::Verified),
            Self::Verified | Self::Failed => None,
        }
    }

    /// Whether the flow has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Verified | Self::Failed)
    }
}
