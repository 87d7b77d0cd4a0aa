pub const PAGE: &str = "min-h-screen w-full bg-[#F9F7F2]";
pub const PAGE_INNER: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col items-center";

pub const WHEEL_STAGE: &str = "relative flex flex-col items-center justify-center py-10 md:py-20";
pub const WHEEL_GLOW: &str = "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[350px] md:w-[550px] h-[350px] md:h-[550px] bg-red-500 opacity-5 blur-[60px] md:blur-[80px] rounded-full pointer-events-none z-0";
pub const WHEEL_HOLDER: &str = "relative z-10 cursor-pointer";
pub const WHEEL_POINTER: &str = "absolute -top-6 md:-top-7 left-1/2 -translate-x-1/2 z-50 pointer-events-none drop-shadow-md";
pub const WHEEL_BEZEL_OUTER: &str = "absolute inset-[-16px] md:inset-[-24px] rounded-full bg-white shadow-xl pointer-events-none";
pub const WHEEL_BEZEL_INNER: &str = "absolute inset-[-8px] md:inset-[-12px] rounded-full border-2 border-red-100 bg-gray-50 pointer-events-none z-0";
pub const WHEEL_DISC: &str = "relative rounded-full overflow-hidden shadow-[0_10px_20px_rgba(0,0,0,0.1)] border-4 border-white";
pub const WHEEL_SHADE: &str = "absolute inset-0 rounded-full shadow-[inset_0_0_40px_rgba(0,0,0,0.15)] pointer-events-none";
pub const WHEEL_FLOOR: &str = "absolute -bottom-10 md:-bottom-20 w-[280px] md:w-[400px] h-[20px] md:h-[30px] bg-black/5 blur-xl pointer-events-none";

pub const SPIN_BUTTON: &str = "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 z-[100] w-16 h-16 md:w-24 md:h-24 rounded-full border-4 border-white flex flex-col items-center justify-center shadow-lg cursor-pointer transition-transform bg-gradient-to-br from-[#EF4444] to-[#B91C1C] hover:scale-105 active:scale-95";
pub const SPIN_BUTTON_BUSY: &str = "opacity-90 scale-95 cursor-wait";

pub const MODAL_OVERLAY: &str = "fixed inset-0 z-[9999] flex items-center justify-center p-4";
pub const MODAL_BACKDROP: &str = "absolute inset-0 bg-black/40 backdrop-blur-[4px]";
pub const MODAL_CARD: &str = "relative w-full max-w-sm text-center";
pub const MODAL_BUTTON: &str = "w-full py-4 bg-gradient-to-r from-red-700 to-red-600 text-white font-bold rounded-xl text-xs tracking-[0.2em] shadow-lg shadow-red-500/30 hover:shadow-red-500/50 hover:scale-[1.02] active:scale-95 transition-all duration-300 border-t border-red-500 font-sans";

pub const PRIZE_LIST: &str = "w-full max-w-3xl grid grid-cols-2 md:grid-cols-4 gap-3 mt-8";
pub const PRIZE_ITEM: &str = "flex items-center gap-3 bg-white p-3 rounded-lg shadow-sm border-l-4 border-red-700";
pub const PRIZE_ITEM_MUTED: &str = "flex items-center gap-3 bg-gray-50 p-3 rounded-lg shadow-sm border-l-4 border-gray-300 opacity-70";
