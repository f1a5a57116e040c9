use dioxus::prelude::*;

const STORAGE_KEY: &str = "asseni_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    Kz,
    En,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Ru, Lang::Kz, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::Kz => "kk",
            Lang::En => "en",
        }
    }

    /// Short label for the switcher.
    pub fn label(self) -> &'static str {
        match self {
            Lang::Ru => "RU",
            Lang::Kz => "KZ",
            Lang::En => "EN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" | "ru-kz" => Some(Lang::Ru),
            "kk" | "kz" | "kk-kz" => Some(Lang::Kz),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to Russian.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::Ru);
    use_context_provider(|| lang);

    // Best-effort: load from localStorage or browser language after mount.
    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"
            (function(){{
              try {{
                const saved = localStorage.getItem("{STORAGE_KEY}");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              }} catch(e) {{}}
              try {{ return (navigator.language || "ru"); }} catch(e) {{}}
              return "ru";
            }})()
            "#
            );
            if let Ok(v) = document::eval(&js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing I18nProvider context, using local Lang::Ru signal");
    use_signal(|| Lang::Ru)
}

/// Switch language and remember the choice in the browser.
pub fn set_lang(mut current: Signal<Lang>, lang: Lang) {
    current.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{STORAGE_KEY}","{code}"); document.documentElement.lang = "{code}"; }} catch(e) {{}} return ""; }})()"#,
            code = lang.code()
        ))
        .await;
    });
}

/// RU / KZ / EN buttons.
#[component]
pub fn LanguageSwitcher() -> Element {
    let lang_sig = use_lang();
    let current = lang_sig();

    rsx! {
        div { class: "lang_switch", role: "group", "aria-label": t(current, "lang.label"),
            for lang in Lang::ALL {
                button {
                    key: "{lang.code()}",
                    class: if lang == current { "lang_btn active" } else { "lang_btn" },
                    onclick: move |_| set_lang(lang_sig, lang),
                    "{lang.label()}"
                }
            }
        }
    }
}

/// Translate a key. Falls back to Russian, then to the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    lookup(lang, key)
        .or_else(|| lookup(Lang::Ru, key))
        .unwrap_or(key)
        .to_string()
}

/// Translate a key, falling back to `fallback` when `lang` has no entry.
/// Catalog-backed strings pass the catalog literal as the fallback.
pub fn t_or(lang: Lang, key: &str, fallback: &str) -> String {
    lookup(lang, key).unwrap_or(fallback).to_string()
}

/// [`t`] with `{name}` placeholders replaced from `args`.
pub fn t_args(lang: Lang, key: &str, args: &[(&str, &str)]) -> String {
    let mut out = t(lang, key);
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    let text = match (lang, key) {
        // Nav / common
        (_, "app.name") => "Asseni",
        (Lang::Ru, "nav.home") => "Главная",
        (Lang::Kz, "nav.home") => "Басты бет",
        (Lang::En, "nav.home") => "Home",
        (Lang::Ru, "nav.works") => "Наши работы",
        (Lang::Kz, "nav.works") => "Біздің жұмыстар",
        (Lang::En, "nav.works") => "Our works",
        (Lang::Ru, "nav.contact") => "Контакты",
        (Lang::Kz, "nav.contact") => "Байланыс",
        (Lang::En, "nav.contact") => "Contacts",
        (Lang::Ru, "nav.cta") => "Заказать звонок",
        (Lang::Kz, "nav.cta") => "Қоңырауға тапсырыс беру",
        (Lang::En, "nav.cta") => "Request a call",
        (Lang::Ru, "nav.toggle_menu") => "Открыть меню",
        (Lang::Kz, "nav.toggle_menu") => "Мәзірді ашу",
        (Lang::En, "nav.toggle_menu") => "Toggle menu",
        (Lang::Ru, "lang.label") => "Язык",
        (Lang::Kz, "lang.label") => "Тіл",
        (Lang::En, "lang.label") => "Language",
        (Lang::Ru, "common.phone") => "Телефон",
        (Lang::Kz, "common.phone") => "Телефон",
        (Lang::En, "common.phone") => "Phone",
        (_, "common.email") => "Email",
        (Lang::Ru, "common.address") => "Адрес",
        (Lang::Kz, "common.address") => "Мекенжай",
        (Lang::En, "common.address") => "Address",
        (Lang::Ru, "common.close") => "Закрыть",
        (Lang::Kz, "common.close") => "Жабу",
        (Lang::En, "common.close") => "Close",
        (Lang::Ru, "company.address") => "г. Караганда, ул. Пригородная, д. 1б",
        (Lang::Kz, "company.address") => "Қарағанды қ., Пригородная к-сі, 1б үй",
        (Lang::En, "company.address") => "1b Prigorodnaya St, Karaganda",

        // Footer
        (Lang::Ru, "footer.blurb") => "Профессиональное строительство и ремонт любой сложности с 2014 года.",
        (Lang::Kz, "footer.blurb") => "2014 жылдан бері кез келген күрделіліктегі кәсіби құрылыс және жөндеу.",
        (Lang::En, "footer.blurb") => "Professional construction and renovation of any complexity since 2014.",
        (Lang::Ru, "footer.nav_title") => "Навигация",
        (Lang::Kz, "footer.nav_title") => "Навигация",
        (Lang::En, "footer.nav_title") => "Navigation",
        (Lang::Ru, "footer.services_title") => "Услуги",
        (Lang::Kz, "footer.services_title") => "Қызметтер",
        (Lang::En, "footer.services_title") => "Services",
        (Lang::Ru, "footer.services.houses") => "Строительство домов",
        (Lang::En, "footer.services.houses") => "House construction",
        (Lang::Ru, "footer.services.apartments") => "Ремонт квартир",
        (Lang::En, "footer.services.apartments") => "Apartment renovation",
        (Lang::Ru, "footer.services.commercial") => "Коммерческие объекты",
        (Lang::En, "footer.services.commercial") => "Commercial buildings",
        (Lang::Ru, "footer.services.facades") => "Фасадные работы",
        (Lang::En, "footer.services.facades") => "Facade works",
        (Lang::Ru, "footer.services.roofing") => "Кровельные работы",
        (Lang::En, "footer.services.roofing") => "Roofing",
        (Lang::Ru, "footer.services.interior") => "Дизайн интерьера",
        (Lang::En, "footer.services.interior") => "Interior design",
        (Lang::Ru, "footer.contacts_title") => "Контакты",
        (Lang::Kz, "footer.contacts_title") => "Байланыс",
        (Lang::En, "footer.contacts_title") => "Contacts",
        (Lang::Ru, "footer.rights") => "Все права защищены.",
        (Lang::Kz, "footer.rights") => "Барлық құқықтар қорғалған.",
        (Lang::En, "footer.rights") => "All rights reserved.",

        // Landing
        (Lang::Ru, "home.hero.title_prefix") => "Строительная компания",
        (Lang::Kz, "home.hero.title_prefix") => "Құрылыс компаниясы",
        (Lang::En, "home.hero.title_prefix") => "Construction company",
        (Lang::Ru, "home.hero.subtitle") => "Профессиональное строительство и ремонт любой сложности. Качество, надежность и индивидуальный подход к каждому проекту.",
        (Lang::En, "home.hero.subtitle") => "Professional construction and renovation of any complexity. Quality, reliability and a tailored approach to every project.",
        (Lang::Ru, "home.hero.cta_consult") => "Получить консультацию",
        (Lang::Kz, "home.hero.cta_consult") => "Кеңес алу",
        (Lang::En, "home.hero.cta_consult") => "Get a consultation",
        (Lang::Ru, "home.hero.cta_projects") => "Наши проекты",
        (Lang::Kz, "home.hero.cta_projects") => "Біздің жобалар",
        (Lang::En, "home.hero.cta_projects") => "Our projects",
        (Lang::Ru, "home.features.title") => "Почему выбирают нас",
        (Lang::En, "home.features.title") => "Why choose us",
        (Lang::Ru, "home.features.experience.title") => "Опыт работы",
        (Lang::En, "home.features.experience.title") => "Experience",
        (Lang::Ru, "home.features.experience.desc") => "Более 30 лет успешной работы в строительной отрасли",
        (Lang::En, "home.features.experience.desc") => "More than 30 years of successful work in construction",
        (Lang::Ru, "home.features.quality.title") => "Гарантия качества",
        (Lang::En, "home.features.quality.title") => "Quality guarantee",
        (Lang::Ru, "home.features.quality.desc") => "Официальная гарантия на все виды выполненных работ",
        (Lang::En, "home.features.quality.desc") => "An official warranty on every kind of work we deliver",
        (Lang::Ru, "home.features.team.title") => "Профессионалы",
        (Lang::En, "home.features.team.title") => "Professionals",
        (Lang::Ru, "home.features.team.desc") => "Команда квалифицированных специалистов с большим опытом",
        (Lang::En, "home.features.team.desc") => "A team of qualified specialists with deep experience",
        (Lang::Ru, "home.features.prices.title") => "Лучшие цены",
        (Lang::En, "home.features.prices.title") => "Best prices",
        (Lang::Ru, "home.features.prices.desc") => "Конкурентные цены без скрытых платежей и переплат",
        (Lang::En, "home.features.prices.desc") => "Competitive prices with no hidden fees",
        (Lang::Ru, "home.services.title") => "Наши услуги",
        (Lang::En, "home.services.title") => "Our services",
        (Lang::Ru, "home.services.construction.title") => "Строительство и реконструкция",
        (Lang::En, "home.services.construction.title") => "Construction and reconstruction",
        (Lang::Ru, "home.services.construction.desc") => "Проектирование, строительство и капитальный ремонт зданий и сооружений любого назначения — административных, жилых и промышленных объектов.",
        (Lang::En, "home.services.construction.desc") => "Design, construction and major repair of administrative, residential and industrial buildings.",
        (Lang::Ru, "home.services.electrical.title") => "Электромонтаж и связь",
        (Lang::En, "home.services.electrical.title") => "Electrical works and telecom",
        (Lang::Ru, "home.services.electrical.desc") => "Строительство линий электропередачи (ВЛЭ), трансформаторных подстанций, кабельных линий электроснабжения и волоконно-оптических линий связи.",
        (Lang::En, "home.services.electrical.desc") => "Overhead power lines, transformer substations, power cable lines and fibre-optic communication lines.",
        (Lang::Ru, "home.services.automation.title") => "Автоматизация и системы учёта",
        (Lang::En, "home.services.automation.title") => "Automation and metering",
        (Lang::Ru, "home.services.automation.desc") => "Разработка и внедрение автоматических систем управления технологическими процессами, АСКУЭ и систем мониторинга безопасности.",
        (Lang::En, "home.services.automation.desc") => "Process control systems, automated energy metering and security monitoring systems.",
        (Lang::Ru, "home.services.manufacturing.title") => "Промышленное производство",
        (Lang::En, "home.services.manufacturing.title") => "Manufacturing",
        (Lang::Ru, "home.services.manufacturing.desc") => "Сборка шкафов управления, блок-боксов и металлоконструкций различной сложности на современном оборудовании.",
        (Lang::En, "home.services.manufacturing.desc") => "Control cabinets, modular enclosures and steel structures built on modern equipment.",
        (Lang::Ru, "home.services.innovation.title") => "Инновационные решения и инфраструктура",
        (Lang::En, "home.services.innovation.title") => "Innovation and infrastructure",
        (Lang::Ru, "home.services.innovation.desc") => "Строительство и монтаж светофорных объектов, внедрение систем «умное освещение», IoT и комплексная автоматизация городской инфраструктуры.",
        (Lang::En, "home.services.innovation.desc") => "Traffic light installations, smart lighting, IoT and end-to-end automation of city infrastructure.",
        (Lang::Ru, "home.services.sales.title") => "Продажи и лицензии",
        (Lang::En, "home.services.sales.title") => "Sales and licences",
        (Lang::Ru, "home.services.sales.desc") => "Оптовые поставки стеновых панелей Мультиплит и КИП-оборудования. Компания имеет лицензии I категории на строительно-монтажные, проектные и изыскательские работы.",
        (Lang::En, "home.services.sales.desc") => "Wholesale supply of Multiplit wall panels and instrumentation. Category I licences for construction, design and survey works.",
        (Lang::Ru, "home.stats.projects_label") => "Завершенных проектов",
        (Lang::En, "home.stats.projects_label") => "Completed projects",
        (Lang::Ru, "home.stats.years_label") => "Лет на рынке",
        (Lang::En, "home.stats.years_label") => "Years on the market",
        (Lang::Ru, "home.contact.title") => "Свяжитесь с нами",
        (Lang::Kz, "home.contact.title") => "Бізбен байланысыңыз",
        (Lang::En, "home.contact.title") => "Get in touch",
        (Lang::Ru, "home.contact.subtitle") => "Оставьте заявку и наш менеджер свяжется с вами в ближайшее время",
        (Lang::En, "home.contact.subtitle") => "Leave a request and our manager will contact you shortly",
        (Lang::Ru, "home.contact.info_title") => "Контактная информация",
        (Lang::En, "home.contact.info_title") => "Contact information",
        (Lang::Ru, "home.contact.form_title") => "Форма обратной связи",
        (Lang::En, "home.contact.form_title") => "Feedback form",

        // Lead form
        (Lang::Ru, "lead.name_label") => "Имя *",
        (Lang::Kz, "lead.name_label") => "Аты *",
        (Lang::En, "lead.name_label") => "Name *",
        (Lang::Ru, "lead.name_placeholder") => "Ваше имя",
        (Lang::Kz, "lead.name_placeholder") => "Сіздің атыңыз",
        (Lang::En, "lead.name_placeholder") => "Your name",
        (Lang::Ru, "lead.phone_label") => "Телефон *",
        (Lang::En, "lead.phone_label") => "Phone *",
        (_, "lead.phone_placeholder") => "+7 (___) ___-__-__",
        (_, "lead.email_label") => "Email",
        (_, "lead.email_placeholder") => "example@mail.com",
        (Lang::Ru, "lead.message_label") => "Сообщение",
        (Lang::Kz, "lead.message_label") => "Хабарлама",
        (Lang::En, "lead.message_label") => "Message",
        (Lang::Ru, "lead.message_label_required") => "Сообщение *",
        (Lang::Kz, "lead.message_label_required") => "Хабарлама *",
        (Lang::En, "lead.message_label_required") => "Message *",
        (Lang::Ru, "lead.message_placeholder") => "Расскажите о вашем проекте...",
        (Lang::En, "lead.message_placeholder") => "Tell us about your project...",
        (Lang::Ru, "lead.submit") => "Отправить заявку",
        (Lang::Kz, "lead.submit") => "Өтінім жіберу",
        (Lang::En, "lead.submit") => "Send request",
        (Lang::Ru, "lead.sending") => "Отправка…",
        (Lang::Kz, "lead.sending") => "Жіберілуде…",
        (Lang::En, "lead.sending") => "Sending…",
        (Lang::Ru, "lead.success") => "Спасибо! Ваша заявка отправлена.",
        (Lang::Kz, "lead.success") => "Рахмет! Өтініміңіз жіберілді.",
        (Lang::En, "lead.success") => "Thank you! Your request has been sent.",
        (Lang::Ru, "lead.error") => "Ошибка отправки. Попробуйте позже.",
        (Lang::Kz, "lead.error") => "Жіберу қатесі. Кейінірек қайталап көріңіз.",
        (Lang::En, "lead.error") => "Sending failed. Please try again later.",
        (Lang::Ru, "lead.network_error") => "Ошибка сети. Попробуйте позже.",
        (Lang::Kz, "lead.network_error") => "Желі қатесі. Кейінірек қайталап көріңіз.",
        (Lang::En, "lead.network_error") => "Network error. Please try again later.",
        (Lang::Ru, "lead.key_missing") => "Форма временно недоступна: не настроен ключ Web3Forms.",
        (Lang::En, "lead.key_missing") => "The form is temporarily unavailable: the Web3Forms key is not configured.",
        (Lang::Ru, "lead.call_us") => "Позвоните нам: +7 (701) 122-24-77",
        (Lang::En, "lead.call_us") => "Call us: +7 (701) 122-24-77",
        (Lang::Ru, "lead.missing_field") => "Заполните поле «{field}»",
        (Lang::Kz, "lead.missing_field") => "«{field}» өрісін толтырыңыз",
        (Lang::En, "lead.missing_field") => "Please fill in “{field}”",
        (Lang::Ru, "lead.field.name") => "Имя",
        (Lang::Kz, "lead.field.name") => "Аты",
        (Lang::En, "lead.field.name") => "Name",
        (Lang::Ru, "lead.field.phone") => "Телефон",
        (Lang::En, "lead.field.phone") => "Phone",
        (Lang::Ru, "lead.field.message") => "Сообщение",
        (Lang::Kz, "lead.field.message") => "Хабарлама",
        (Lang::En, "lead.field.message") => "Message",

        // Contact page
        (Lang::Ru, "contact.header.title") => "Контакты",
        (Lang::Kz, "contact.header.title") => "Байланыс",
        (Lang::En, "contact.header.title") => "Contacts",
        (Lang::Ru, "contact.header.subtitle") => "Свяжитесь с нами удобным для вас способом",
        (Lang::Kz, "contact.header.subtitle") => "Бізбен өзіңізге ыңғайлы тәсілмен байланысыңыз",
        (Lang::En, "contact.header.subtitle") => "Reach us whichever way suits you",
        (Lang::Ru, "contact.cards.phone.title") => "Телефон",
        (Lang::En, "contact.cards.phone.title") => "Phone",
        (Lang::Ru, "contact.cards.phone.hours") => "Пн–Пт с 9:00 до 18:00",
        (Lang::En, "contact.cards.phone.hours") => "Mon–Fri, 9:00 to 18:00",
        (Lang::Ru, "contact.cards.email.response") => "Ответим в течение рабочего дня",
        (Lang::En, "contact.cards.email.response") => "We reply within one business day",
        (Lang::Ru, "contact.cards.address.title") => "Адрес",
        (Lang::En, "contact.cards.address.title") => "Address",
        (Lang::Ru, "contact.cards.address.city") => "г. Караганда",
        (Lang::Kz, "contact.cards.address.city") => "Қарағанды қ.",
        (Lang::En, "contact.cards.address.city") => "Karaganda",
        (Lang::Ru, "contact.cards.address.street") => "ул. Пригородная, д. 1б",
        (Lang::Kz, "contact.cards.address.street") => "Пригородная к-сі, 1б үй",
        (Lang::En, "contact.cards.address.street") => "1b Prigorodnaya St",
        (Lang::Ru, "contact.cards.hours.title") => "Режим работы",
        (Lang::Kz, "contact.cards.hours.title") => "Жұмыс уақыты",
        (Lang::En, "contact.cards.hours.title") => "Working hours",
        (Lang::Ru, "contact.cards.hours.weekdays") => "Пн–Пт: 9:00 – 18:00",
        (Lang::En, "contact.cards.hours.weekdays") => "Mon–Fri: 9:00 – 18:00",
        (Lang::Ru, "contact.cards.hours.weekend") => "Сб–Вс: выходной",
        (Lang::En, "contact.cards.hours.weekend") => "Sat–Sun: closed",
        (Lang::Ru, "contact.form.title") => "Отправить заявку",
        (Lang::En, "contact.form.title") => "Send a request",
        (Lang::Ru, "contact.form.subtitle") => "Заполните форму, и мы свяжемся с вами для обсуждения деталей",
        (Lang::En, "contact.form.subtitle") => "Fill in the form and we will get back to you to discuss the details",
        (Lang::Ru, "contact.form.footnote") => "Нажимая кнопку, вы соглашаетесь на обработку персональных данных.",
        (Lang::En, "contact.form.footnote") => "By sending the form you agree to the processing of your personal data.",
        (Lang::Ru, "contact.why.title") => "Почему Asseni",
        (Lang::En, "contact.why.title") => "Why Asseni",
        (Lang::Ru, "contact.why.points.exp.title") => "Более 30 лет опыта",
        (Lang::En, "contact.why.points.exp.title") => "30+ years of experience",
        (Lang::Ru, "contact.why.points.exp.desc") => "Сотни реализованных объектов по всему Казахстану",
        (Lang::En, "contact.why.points.exp.desc") => "Hundreds of delivered sites across Kazakhstan",
        (Lang::Ru, "contact.why.points.solutions.title") => "Комплексные решения",
        (Lang::En, "contact.why.points.solutions.title") => "Turnkey solutions",
        (Lang::Ru, "contact.why.points.solutions.desc") => "От проектирования до сдачи объекта под ключ",
        (Lang::En, "contact.why.points.solutions.desc") => "From design to handover",
        (Lang::Ru, "contact.why.points.production.title") => "Собственное производство",
        (Lang::En, "contact.why.points.production.title") => "In-house manufacturing",
        (Lang::Ru, "contact.why.points.production.desc") => "Шкафы управления, блок-боксы и металлоконструкции",
        (Lang::En, "contact.why.points.production.desc") => "Control cabinets, modular enclosures and steel structures",
        (Lang::Ru, "contact.why.points.quality.title") => "Контроль качества",
        (Lang::En, "contact.why.points.quality.title") => "Quality control",
        (Lang::Ru, "contact.why.points.quality.desc") => "Гарантия на все виды работ и лицензии I категории",
        (Lang::En, "contact.why.points.quality.desc") => "Warranty on all work and Category I licences",
        (Lang::Ru, "contact.urgent.title") => "Срочная консультация",
        (Lang::En, "contact.urgent.title") => "Urgent consultation",
        (Lang::Ru, "contact.urgent.subtitle") => "Нужен ответ прямо сейчас?",
        (Lang::En, "contact.urgent.subtitle") => "Need an answer right now?",
        (Lang::Ru, "contact.urgent.body") => "Позвоните нам, и инженер ответит на ваши вопросы.",
        (Lang::En, "contact.urgent.body") => "Call us and an engineer will answer your questions.",

        // Works
        (Lang::Ru, "works.header.title") => "Наши работы",
        (Lang::Kz, "works.header.title") => "Біздің жұмыстар",
        (Lang::En, "works.header.title") => "Our works",
        (Lang::Ru, "works.header.subtitle") => "Портфолио выполненных проектов строительной компании Asseni",
        (Lang::Kz, "works.header.subtitle") => "Asseni құрылыс компаниясының орындалған жобалар портфолиосы",
        (Lang::En, "works.header.subtitle") => "A portfolio of projects delivered by Asseni",
        (Lang::Ru, "works.search_placeholder") => "Поиск по заказчику или виду работ...",
        (Lang::Kz, "works.search_placeholder") => "Тапсырыс беруші немесе жұмыс түрі бойынша іздеу...",
        (Lang::En, "works.search_placeholder") => "Search by client or type of work...",
        (Lang::Ru, "works.all_years") => "Все годы",
        (Lang::Kz, "works.all_years") => "Барлық жылдар",
        (Lang::En, "works.all_years") => "All years",
        (Lang::Ru, "works.found") => "Найдено проектов: {count}",
        (Lang::Kz, "works.found") => "Табылған жобалар: {count}",
        (Lang::En, "works.found") => "Projects found: {count}",
        (Lang::Ru, "works.view.grid") => "Вид сеткой",
        (Lang::En, "works.view.grid") => "Grid view",
        (Lang::Ru, "works.view.list") => "Вид списком",
        (Lang::En, "works.view.list") => "List view",
        (Lang::Ru, "works.empty.title") => "Проекты не найдены",
        (Lang::Kz, "works.empty.title") => "Жобалар табылмады",
        (Lang::En, "works.empty.title") => "No projects found",
        (Lang::Ru, "works.empty.hint") => "Попробуйте изменить параметры поиска",
        (Lang::En, "works.empty.hint") => "Try changing the search settings",
        (Lang::Ru, "works.work_types") => "Виды работ",
        (Lang::Kz, "works.work_types") => "Жұмыс түрлері",
        (Lang::En, "works.work_types") => "Types of work",
        (Lang::Ru, "works.table.client") => "Наименование заказчика",
        (Lang::Kz, "works.table.client") => "Тапсырыс беруші",
        (Lang::En, "works.table.client") => "Client",
        (Lang::Ru, "works.table.year") => "Год",
        (Lang::Kz, "works.table.year") => "Жыл",
        (Lang::En, "works.table.year") => "Year",
        (Lang::Ru, "works.table.status") => "Статус",
        (Lang::Kz, "works.table.status") => "Мәртебе",
        (Lang::En, "works.table.status") => "Status",
        (Lang::Ru, "works.stats.title") => "Статистика проектов",
        (Lang::Kz, "works.stats.title") => "Жобалар статистикасы",
        (Lang::En, "works.stats.title") => "Project statistics",
        (Lang::Ru, "works.stats.completed") => "Завершенных проектов",
        (Lang::En, "works.stats.completed") => "Completed projects",
        (Lang::Ru, "works.stats.in_progress") => "Проектов в работе",
        (Lang::En, "works.stats.in_progress") => "Projects in progress",
        (Lang::Ru, "works.stats.planned") => "Запланированных проектов",
        (Lang::En, "works.stats.planned") => "Planned projects",
        (Lang::Ru, "works.status.completed") => "Завершен",
        (Lang::Kz, "works.status.completed") => "Аяқталған",
        (Lang::En, "works.status.completed") => "Completed",
        (Lang::Ru, "works.status.in_progress") => "В процессе",
        (Lang::Kz, "works.status.in_progress") => "Орындалуда",
        (Lang::En, "works.status.in_progress") => "In progress",
        (Lang::Ru, "works.status.planned") => "Запланирован",
        (Lang::Kz, "works.status.planned") => "Жоспарланған",
        (Lang::En, "works.status.planned") => "Planned",

        // Works: English copies of catalog text
        (Lang::En, "works.items.1.work_types.0") => "Electrical works and telecom",
        (Lang::En, "works.items.1.work_types.1") => "Fibre-optic lines",
        (Lang::En, "works.items.1.description") => "38 km of fibre-optic line along the Karaganda – Balkhash railway, including access node installation.",
        (Lang::En, "works.items.2.work_types.0") => "Construction and reconstruction",
        (Lang::En, "works.items.2.work_types.1") => "Electrical works and telecom",
        (Lang::En, "works.items.2.description") => "Indoor and outdoor power networks for a four-section residential complex, commissioning of main switchboards.",
        (Lang::En, "works.items.3.work_types.0") => "Electrical works and telecom",
        (Lang::En, "works.items.3.work_types.1") => "Transformer substations",
        (Lang::En, "works.items.3.description") => "Reconstruction of a 10 kV overhead line and replacement of three packaged substations near Karaganda.",
        (Lang::En, "works.items.4.work_types.0") => "Innovative solutions",
        (Lang::En, "works.items.4.work_types.1") => "Traffic lights",
        (Lang::En, "works.items.4.description") => "Twelve adaptive traffic light installations connected to the city monitoring centre.",
        (Lang::En, "works.items.5.work_types.0") => "Automation and metering",
        (Lang::En, "works.items.5.work_types.1") => "Energy metering",
        (Lang::En, "works.items.5.description") => "Automated commercial energy metering for two rolling mill shops.",
        (Lang::En, "works.items.6.work_types.0") => "Manufacturing",
        (Lang::En, "works.items.6.work_types.1") => "Control cabinets",
        (Lang::En, "works.items.6.description") => "46 control cabinets and modular enclosures for recycled water pumping stations.",
        (Lang::En, "works.items.7.work_types.0") => "Construction and reconstruction",
        (Lang::En, "works.items.7.work_types.1") => "Major repair",
        (Lang::En, "works.items.7.description") => "Major repair of a school building: roof, facade, utilities and CCTV.",
        (Lang::En, "works.items.8.work_types.0") => "Electrical works and telecom",
        (Lang::En, "works.items.8.work_types.1") => "Cable lines",
        (Lang::En, "works.items.8.description") => "110 kV cable line connecting the new substation of the East industrial zone.",
        (Lang::En, "works.items.9.work_types.0") => "Innovative solutions",
        (Lang::En, "works.items.9.work_types.1") => "Smart lighting",
        (Lang::En, "works.items.9.work_types.2") => "IoT",
        (Lang::En, "works.items.9.description") => "Smart street lighting for three districts with remote control and per-pole metering.",
        (Lang::En, "works.items.10.work_types.0") => "Sales and licences",
        (Lang::En, "works.items.10.work_types.1") => "Wall panels",
        (Lang::En, "works.items.10.description") => "Wholesale supply of Multiplit wall panels for a 6,000 m² warehouse complex.",
        (Lang::En, "works.items.11.work_types.0") => "Automation and metering",
        (Lang::En, "works.items.11.work_types.1") => "Security monitoring",
        (Lang::En, "works.items.11.description") => "Security monitoring and access control for regional communication hubs.",
        (Lang::En, "works.items.12.work_types.0") => "Construction and reconstruction",
        (Lang::En, "works.items.12.description") => "General construction and steel structure assembly for a residential parking garage.",
        (Lang::En, "works.items.13.work_types.0") => "Automation and metering",
        (Lang::En, "works.items.13.work_types.1") => "Process control",
        (Lang::En, "works.items.13.description") => "Process control system for boiler equipment with data delivered to the dispatch room.",
        (Lang::En, "works.items.14.work_types.0") => "Construction and reconstruction",
        (Lang::En, "works.items.14.work_types.1") => "Design works",
        (Lang::En, "works.items.14.description") => "Design and reconstruction of an administrative building with new utility systems.",

        // Not found
        (Lang::Ru, "not_found.title") => "Страница не найдена",
        (Lang::Kz, "not_found.title") => "Бет табылмады",
        (Lang::En, "not_found.title") => "Page not found",
        (Lang::Ru, "not_found.body") => "Такой страницы нет. Возможно, ссылка устарела.",
        (Lang::En, "not_found.body") => "This page does not exist. The link may be out of date.",
        (Lang::Ru, "not_found.cta") => "На главную",
        (Lang::Kz, "not_found.cta") => "Басты бетке",
        (Lang::En, "not_found.cta") => "Go home",

        (Lang::Ru, "toast.dismiss") => "Закрыть",
        (Lang::Kz, "toast.dismiss") => "Жабу",
        (Lang::En, "toast.dismiss") => "Dismiss",

        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_russian_strings() {
        assert_eq!(t(Lang::Ru, "nav.works"), "Наши работы");
        assert_eq!(t(Lang::En, "nav.works"), "Our works");
        assert_eq!(t(Lang::Kz, "nav.works"), "Біздің жұмыстар");
    }

    #[test]
    fn fallback_to_russian_then_key() {
        // Has Russian but not Kazakh explicitly:
        assert_eq!(t(Lang::Kz, "home.features.title"), t(Lang::Ru, "home.features.title"));
        // Missing everywhere returns key:
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
    }

    #[test]
    fn t_or_uses_the_given_fallback() {
        assert_eq!(
            t_or(Lang::En, "works.items.1.work_types.0", "Электромонтаж и связь"),
            "Electrical works and telecom"
        );
        assert_eq!(
            t_or(Lang::Ru, "works.items.1.work_types.0", "Электромонтаж и связь"),
            "Электромонтаж и связь"
        );
        assert_eq!(t_or(Lang::Kz, "works.items.1.client", "АО «Транстелеком»"), "АО «Транстелеком»");
    }

    #[test]
    fn t_args_substitutes_placeholders() {
        assert_eq!(t_args(Lang::Ru, "works.found", &[("count", "7")]), "Найдено проектов: 7");
        assert_eq!(t_args(Lang::En, "works.found", &[("count", "0")]), "Projects found: 0");
        // Unknown placeholders stay untouched.
        assert_eq!(t_args(Lang::Ru, "works.found", &[("other", "1")]), "Найдено проектов: {count}");
    }

    #[test]
    fn lang_codes_parse() {
        assert_eq!(Lang::from_code("ru-RU"), Some(Lang::Ru));
        assert_eq!(Lang::from_code("kk"), Some(Lang::Kz));
        assert_eq!(Lang::from_code("EN-GB"), Some(Lang::En));
        assert_eq!(Lang::from_code("de"), None);
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn every_status_has_a_label_in_every_language() {
        for lang in Lang::ALL {
            for status in api::types::ProjectStatus::ALL {
                let key = format!("works.status.{}", status.i18n_key());
                assert_ne!(t(lang, &key), key);
            }
        }
    }

    #[test]
    fn english_covers_every_catalog_description() {
        for project in api::catalog::projects() {
            let key = format!("works.items.{}.description", project.id);
            assert_ne!(t_or(Lang::En, &key, &project.description), project.description);
        }
    }
}
