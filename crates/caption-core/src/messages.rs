//! User-facing message texts and menus.
//!
//! The literal caption/menu wording lives here so the state machine
//! stays free of string formatting concerns. All texts are Persian.

use caption_models::{Menu, Plan};

/// Welcome message for `/start`.
pub fn welcome() -> String {
    "سلام! 🌸\n\
     به ربات کپشن‌نویس سالن زیبایی خوش آمدید!\n\n\
     🎯 دستورات:\n\
     /start - راه‌اندازی مجدد\n\
     /help - راهنمای استفاده\n\
     /services - خدمات سالن\n\
     /caption - دریافت کپشن\n\n\
     برای شروع، نوع سرویس کپشن را انتخاب کنید:"
        .to_string()
}

/// Usage guide for `/help`.
pub fn help_text() -> String {
    "📖 راهنمای ربات:\n\n\
     ۱. با /caption یا دکمه‌های زیر یک سرویس انتخاب کنید.\n\
     ۲. موضوع کپشن را بنویسید (مثلاً: رنگ مو، ناخن، میکاپ).\n\
     ۳. جزئیات را بنویسید (مناسبت، لحن، نکات خاص).\n\
     ۴. کپشن آماده را دریافت کنید! ✨\n\n\
     /start در هر مرحله گفتگو را از نو شروع می‌کند."
        .to_string()
}

/// Salon service list for `/services`.
pub fn services_text() -> String {
    "💎 خدمات سالن زیبایی:\n\n\
     ۱. ناخن‌کاری: طراحی ناخن، ژل و اکریلیک، ناخن عروس\n\
     ۲. آرایش مو: کوتاهی و استایل، رنگ و هایلایت، کراتینه\n\
     ۳. مراقبت پوست: پاکسازی و فیشیال، میکرونیدلینگ، پیلینگ\n\
     ۴. آرایش صورت: میکاپ عروس، میکاپ مهمانی، آموزش آرایش\n\n\
     ⏰ ساعت کاری: ۹ صبح تا ۹ شب"
        .to_string()
}

/// Prompt shown with the plan-selection menu.
pub fn choose_plan() -> String {
    "لطفاً نوع سرویس کپشن را انتخاب کنید:".to_string()
}

/// The plan-selection menu.
pub fn plan_menu() -> Menu {
    Menu::plan_selection()
}

/// Prompt for the caption topic after a plan is chosen.
pub fn prompt_topic(plan: Plan) -> String {
    format!(
        "سرویس {} انتخاب شد. ✅\n\
         حالا موضوع کپشن را بنویسید (مثلاً: رنگ مو، ناخن، فیشیال):",
        plan.label()
    )
}

/// Prompt for details once the topic is known.
pub fn prompt_details(topic: &str) -> String {
    format!(
        "موضوع «{topic}» ثبت شد. ✅\n\
         حالا جزئیات را بنویسید (مناسبت، لحن، نکات خاص):"
    )
}

/// Nudge when a button arrives while we expect free text.
pub fn expected_text_nudge() -> String {
    "لطفاً به صورت متنی پاسخ دهید. 🙏".to_string()
}

/// Guidance when free text arrives before a plan is chosen.
pub fn plan_guidance() -> String {
    "برای دریافت کپشن ابتدا یکی از سرویس‌ها را انتخاب کنید:".to_string()
}

/// The final caption reply: generated text plus the salon footer.
pub fn caption_reply(caption: &str) -> String {
    let now = chrono::Local::now().format("%Y/%m/%d %H:%M");
    format!(
        "{caption}\n\n\
         📅 {now}\n\
         📍 تهران، میدان ولیعصر\n\
         📱 ۰۹۱۲XXXXXXX\n\
         🌸 @beauty_salon_iran"
    )
}

/// Progress notice while the generation call is in flight.
pub fn generating_notice() -> String {
    "✨ در حال ساخت کپشن...".to_string()
}

/// Invitation to run another cycle after a successful caption.
pub fn next_caption_hint() -> String {
    "💡 برای کپشن بعدی دوباره یکی از سرویس‌ها را انتخاب کنید:".to_string()
}

/// Apology when generation fails; the user's progress is kept.
pub fn generation_failed() -> String {
    "⚠️ ساخت کپشن موفق نبود. لطفاً چند لحظه دیگر جزئیات را دوباره بفرستید."
        .to_string()
}

/// Reply to an unrecognized slash command.
pub fn unknown_command(command: &str) -> String {
    format!("دستور ناشناخته: {command}\nبا /help راهنما را ببینید.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_reply_keeps_generated_text_first() {
        let reply = caption_reply("💅 کاشت ناخن ژل");
        assert!(reply.starts_with("💅 کاشت ناخن ژل"));
        assert!(reply.contains("📍"));
    }

    #[test]
    fn test_prompt_details_embeds_topic() {
        assert!(prompt_details("رنگ مو").contains("رنگ مو"));
    }
}
