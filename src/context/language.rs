use std::collections::HashMap;
use std::rc::Rc;

use crate::models::Language;
use gloo_storage::{LocalStorage, Storage};

use crate::utils::STORAGE_KEY_LANGUAGE;

/// Current language and its UI strings, shared through a yew context
#[derive(Clone)]
pub struct LanguageContext {
    pub language: Language,
    pub texts: Rc<HashMap<&'static str, &'static str>>,
}

impl PartialEq for LanguageContext {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        let mut texts = HashMap::new();

        match language {
            Language::Arabic => {
                // Navigation
                texts.insert("app_title", "الأخبار");
                texts.insert("language", "اللغة");
                texts.insert("login", "تسجيل الدخول");
                texts.insert("logout", "تسجيل الخروج");
                texts.insert("close", "إغلاق");

                // Feed
                texts.insert("loading_news", "جارٍ تحميل الأخبار...");
                texts.insert("loading_more", "جارٍ تحميل المزيد من القصص...");
                texts.insert("no_news", "لا توجد أخبار متاحة");
                texts.insert("no_more", "لا توجد قصص أخرى.");

                // Story card
                texts.insert("untitled", "بدون عنوان");
                texts.insert("no_summary", "لا يوجد ملخص");
                texts.insert("published", "نُشر في:");
                texts.insert("read_more", "قراءة المزيد");
                texts.insert("read_less", "قراءة أقل");
                texts.insert("articles", "المقالات:");
                texts.insert("more_articles", "المزيد من المقالات");
                texts.insert("show_less", "عرض أقل");

                // Filter
                texts.insert("filter_sources", "تصفية المصادر");
                texts.insert("filter_by_source", "التصفية حسب المصدر");
                texts.insert("no_sources", "لا توجد مصادر");
                texts.insert("apply", "تطبيق");
                texts.insert("cancel", "إلغاء");
                texts.insert("clear", "مسح");
                texts.insert("clear_all", "مسح كل المرشحات");

                // Auth
                texts.insert("processing_auth", "جارٍ التحقق من تسجيل الدخول...");
                texts.insert("login_failed", "🚨 فشل تسجيل الدخول");
                texts.insert("return_home", "العودة إلى الصفحة الرئيسية");
                texts.insert("page_not_found", "الصفحة غير موجودة");
            }
            Language::English => {
                // Navigation
                texts.insert("app_title", "NEWS");
                texts.insert("language", "Language");
                texts.insert("login", "Login");
                texts.insert("logout", "Logout");
                texts.insert("close", "Close");

                // Feed
                texts.insert("loading_news", "Loading news...");
                texts.insert("loading_more", "Loading more stories...");
                texts.insert("no_news", "No news available");
                texts.insert("no_more", "No more stories available.");

                // Story card
                texts.insert("untitled", "Untitled");
                texts.insert("no_summary", "No summary available");
                texts.insert("published", "Published:");
                texts.insert("read_more", "Read More");
                texts.insert("read_less", "Read Less");
                texts.insert("articles", "Articles:");
                texts.insert("more_articles", "More Articles");
                texts.insert("show_less", "Show Less");

                // Filter
                texts.insert("filter_sources", "Filter sources");
                texts.insert("filter_by_source", "Filter by source");
                texts.insert("no_sources", "No sources available");
                texts.insert("apply", "Apply");
                texts.insert("cancel", "Cancel");
                texts.insert("clear", "Clear");
                texts.insert("clear_all", "Clear all filters");

                // Auth
                texts.insert("processing_auth", "Processing authentication...");
                texts.insert("login_failed", "🚨 Login Failed");
                texts.insert("return_home", "Return to Home");
                texts.insert("page_not_found", "Page not found");
            }
        }

        Self { language, texts: Rc::new(texts) }
    }

    pub fn get(&self, key: &str) -> String {
        self.texts.get(key).map(|text| text.to_string()).unwrap_or_else(|| key.to_string())
    }

    pub fn dir(&self) -> &'static str {
        self.language.dir()
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Language saved by a previous visit, or the default
pub fn stored_language() -> Language {
    LocalStorage::get::<Language>(STORAGE_KEY_LANGUAGE).unwrap_or_default()
}

pub fn save_language(language: Language) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY_LANGUAGE, language) {
        log::warn!("⚠️ Could not save language preference: {}", e);
    }
}
