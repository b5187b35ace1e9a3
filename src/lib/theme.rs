//! Shared UI themes and Tailwind class constants to ensure visual consistency
//! across the application.

pub struct Theme;

impl Theme {
    /// Full-screen backdrop behind the password card.
    pub const GATE_BACKDROP: &'static str = "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center p-4";

    /// Card hosting the password form.
    pub const GATE_CARD: &'static str = "w-full max-w-md rounded-xl bg-white dark:bg-gray-800 shadow-xl p-6";

    /// Text input used by forms.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 pr-10 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Small icon variant (often used inside inputs and buttons).
    pub const ICON_SMALL: &'static str = "material-symbols-outlined text-gray-400 dark:text-gray-500 text-sm hover:text-gray-900 dark:hover:text-white transition-colors";
}
