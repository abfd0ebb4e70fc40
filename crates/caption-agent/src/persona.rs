//! Per-tier personas and prompt assembly.

use caption_models::Plan;

/// The `system` persona for a service tier.
pub fn system_prompt(plan: Plan) -> &'static str {
    match plan {
        Plan::Basic => {
            "تو یک کپشن‌نویس برای سالن زیبایی هستی. \
             یک کپشن کوتاه و صمیمی فارسی برای اینستاگرام بنویس: \
             دو تا سه جمله، یک یا دو ایموجی، بدون هشتگ اضافه. \
             فقط متن کپشن را برگردان."
        }
        Plan::Pro => {
            "تو یک کپشن‌نویس حرفه‌ای برای سالن زیبایی هستی. \
             یک کپشن فارسی جذاب و تبلیغاتی برای اینستاگرام بنویس: \
             متن گیرا با دعوت به اقدام، ایموجی‌های مناسب و \
             چهار تا شش هشتگ فارسی بهینه در انتها. \
             فقط متن کپشن را برگردان."
        }
        Plan::Vip => {
            "تو یک کپشن‌نویس لوکس برای سالن‌های زیبایی سطح بالا هستی. \
             یک کپشن فارسی فاخر و خاص برای اینستاگرام بنویس: \
             لحن مجلل و متمایز، تصویرسازی ظریف، ایموجی‌های منتخب و \
             هشتگ‌های خاص برند در انتها. \
             فقط متن کپشن را برگردان."
        }
    }
}

/// The `user` prompt built from the caption topic and details.
pub fn user_prompt(topic: &str, details: &str) -> String {
    format!("موضوع: {topic}\nجزئیات: {details}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_has_distinct_persona() {
        let basic = system_prompt(Plan::Basic);
        let pro = system_prompt(Plan::Pro);
        let vip = system_prompt(Plan::Vip);
        assert_ne!(basic, pro);
        assert_ne!(pro, vip);
        assert_ne!(basic, vip);
    }

    #[test]
    fn test_user_prompt_carries_topic_and_details() {
        let prompt = user_prompt("رنگ مو", "جشن عروسی، لحن شاد");
        assert!(prompt.contains("رنگ مو"));
        assert!(prompt.contains("جشن عروسی، لحن شاد"));
    }
}
