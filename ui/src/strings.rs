//! User-facing copy, collected in one place so the screens stay readable.

pub mod auth {
    pub const SIGN_IN_TITLE: &str = "Welcome back";
    pub const SIGN_IN_SUBTITLE: &str = "Sign in to book appointments with your favorite providers";
    pub const SIGN_UP_TITLE: &str = "Create your account";
    pub const SIGN_UP_SUBTITLE: &str = "Join to discover and book local services";
    pub const CONTINUE_WITH_FACEBOOK: &str = "Continue with Facebook";
    pub const CONTINUE_WITH_GOOGLE: &str = "Continue with Google";
    pub const CONTINUE_WITH_APPLE: &str = "Continue with Apple";
    pub const CONTINUE_WITH_PHONE: &str = "Continue with phone";

    pub const PHONE_TITLE: &str = "What's your number?";
    pub const PHONE_LABEL: &str = "Phone number";
    pub const PHONE_CONTINUE: &str = "Continue";
    pub const COUNTRY_SEARCH_PLACEHOLDER: &str = "Search country or code";

    pub const VERIFY_TITLE: &str = "Enter the code";
    pub const VERIFY_SUBTITLE: &str = "We sent a 6-digit code to";
    pub const VERIFY_PLACEHOLDER: &str = "000000";
    pub const VERIFY_BUTTON: &str = "Verify";
    pub const RESEND: &str = "Resend code";
    pub const RESEND_TIMER: &str = "Resend available in";
    pub const SECONDS: &str = "seconds";
}

pub mod search {
    pub const TITLE: &str = "Search";
    pub const PLACEHOLDER: &str = "Service, provider...";
    pub const SELECT_CITY: &str = "Select city";
    pub const ALL_CITIES: &str = "All cities";
    pub const IN_CITY: &str = "in";
    pub const REVIEWS: &str = "reviews";
    pub const PROMOTED: &str = "Promoted";
    pub const NO_RESULTS: &str = "No providers found";
}

pub mod profile {
    pub const SIGNED_IN_AS: &str = "Signed in as";
    pub const SIGN_OUT: &str = "Sign out";
}
