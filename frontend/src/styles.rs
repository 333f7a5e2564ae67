pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const HEADER: &str = "w-full h-16 flex items-center justify-between border-b border-gray-200/50 dark:border-gray-700/50";
pub const LAYOUT: &str = "grid grid-cols-1 lg:grid-cols-3 gap-8 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_ACTIVE: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-xl ring-2 ring-blue-500 p-6";
pub const CARD_HOVER: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg hover:shadow-xl p-6 transform hover:-translate-y-1 transition-all duration-300 cursor-pointer";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";
pub const BUTTON_GHOST_DANGER: &str = "h-8 w-8 inline-flex items-center justify-center rounded-lg text-gray-500 hover:text-red-600 hover:bg-red-50 dark:hover:bg-red-900/20";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-3 px-3 text-base text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_MUTED_LARGE: &str = "text-lg text-gray-500 dark:text-gray-400";
pub const CHIP_INCLUDED: &str = "inline-flex items-center gap-1 px-3 py-1 rounded-full text-sm bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200 cursor-pointer";
pub const CHIP_EXCLUDED: &str = "inline-flex items-center gap-1 px-3 py-1 rounded-full text-sm bg-gray-100 text-gray-400 line-through dark:bg-gray-700 dark:text-gray-500 cursor-pointer";
pub const CHIP_IDLE: &str = "inline-flex items-center px-3 py-1 rounded-full text-sm bg-gray-100 text-gray-700 dark:bg-gray-700 dark:text-gray-300";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/60 backdrop-blur-sm";
pub const MODAL_PANEL: &str = "bg-white dark:bg-gray-900 rounded-xl shadow-xl p-8 max-w-md w-full mx-4 border border-gray-200/50 dark:border-gray-700/50";
pub const MODAL_PANEL_WIDE: &str = "bg-white dark:bg-gray-900 rounded-xl shadow-xl p-8 max-w-2xl w-full mx-4 border border-gray-200/50 dark:border-gray-700/50";
pub const CONFETTI_CANVAS: &str = "pointer-events-none fixed inset-0 z-50";
