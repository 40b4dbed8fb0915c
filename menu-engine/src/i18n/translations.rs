//! Static message tables

use shared::Language;

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    // Header
    ("header.menu", "Menu"),
    ("header.hours", "Hours"),
    ("header.today", "Today"),
    ("header.closed", "Closed"),
    // Search
    ("search.placeholder", "Search menu..."),
    ("search.noResults", "No items found"),
    ("search.noResultsDesc", "Try a different search term"),
    ("search.clear", "Clear search"),
    ("search.results", "{count} results"),
    // Categories
    ("category.all", "All"),
    // Tags
    ("tag.popular", "Popular"),
    ("tag.bestseller", "Bestseller"),
    ("tag.spicy", "Spicy"),
    ("tag.vegetarian", "Vegetarian"),
    ("tag.new", "New"),
    ("tag.deal", "Deal"),
    ("tag.premium", "Premium"),
    // Actions
    ("action.viewDetails", "View Details"),
    ("action.close", "Close"),
    // Currency
    ("currency.symbol", "DA"),
    ("currency.format", "{price} DA"),
    // Services
    ("service.takeaway", "Takeaway"),
    ("service.dine-in", "Dine-in"),
    // Misc
    ("misc.unavailable", "Unavailable"),
    ("misc.openNow", "Open Now"),
    ("misc.closed", "Closed"),
    ("misc.sizes", "Available sizes:"),
    // Allergen filter
    ("filter.allergens", "Allergen Filter"),
    ("filter.hideAllergens", "Hide items containing:"),
    ("filter.clear", "Clear filters"),
    ("filter.active", "active"),
    ("filter.hint", "Select allergens to hide from menu"),
    ("filter.hiding", "Hiding items with selected allergens"),
    // Allergens
    ("allergen.nuts", "Tree Nuts"),
    ("allergen.celery", "Celery"),
    ("allergen.eggs", "Eggs"),
    ("allergen.fish", "Fish"),
    ("allergen.soy", "Soy"),
    ("allergen.mustard", "Mustard"),
    ("allergen.sulfites", "Sulfites"),
    ("allergen.peanuts", "Peanuts"),
    ("allergen.gluten", "Gluten"),
    ("allergen.crustaceans", "Crustaceans"),
    ("allergen.dairy", "Dairy"),
    ("allergen.lupin", "Lupin"),
    ("allergen.mollusks", "Mollusks"),
    ("allergen.sesame", "Sesame"),
    ("allergen.garlic", "Garlic"),
    ("allergen.onion", "Onion"),
];

const FR: Table = &[
    // Header
    ("header.menu", "Menu"),
    ("header.hours", "Horaires"),
    ("header.today", "Aujourd'hui"),
    ("header.closed", "Fermé"),
    // Search
    ("search.placeholder", "Rechercher..."),
    ("search.noResults", "Aucun résultat"),
    ("search.noResultsDesc", "Essayez un autre terme"),
    ("search.clear", "Effacer la recherche"),
    ("search.results", "{count} résultats"),
    // Categories
    ("category.all", "Tout"),
    // Tags
    ("tag.popular", "Populaire"),
    ("tag.bestseller", "Meilleure vente"),
    ("tag.spicy", "Épicé"),
    ("tag.vegetarian", "Végétarien"),
    ("tag.new", "Nouveau"),
    ("tag.deal", "Promo"),
    ("tag.premium", "Premium"),
    // Actions
    ("action.viewDetails", "Voir détails"),
    ("action.close", "Fermer"),
    // Currency
    ("currency.symbol", "DA"),
    ("currency.format", "{price} DA"),
    // Services
    ("service.takeaway", "À emporter"),
    ("service.dine-in", "Sur place"),
    // Misc
    ("misc.unavailable", "Indisponible"),
    ("misc.openNow", "Ouvert"),
    ("misc.closed", "Fermé"),
    ("misc.sizes", "Tailles disponibles:"),
    // Allergen filter
    ("filter.allergens", "Filtre allergènes"),
    ("filter.hideAllergens", "Masquer les plats contenant:"),
    ("filter.clear", "Effacer les filtres"),
    ("filter.active", "actif"),
    // Allergens
    ("allergen.nuts", "Fruits à coques"),
    ("allergen.celery", "Céleri"),
    ("allergen.eggs", "Oeufs"),
    ("allergen.fish", "Poissons"),
    ("allergen.soy", "Soja"),
    ("allergen.mustard", "Moutarde"),
    ("allergen.sulfites", "Sulfites"),
    ("allergen.peanuts", "Arachides"),
    ("allergen.gluten", "Céréales (Gluten)"),
    ("allergen.crustaceans", "Crustacés"),
    ("allergen.dairy", "Lait"),
    ("allergen.lupin", "Lupin"),
    ("allergen.mollusks", "Mollusques"),
    ("allergen.sesame", "Sésame"),
    ("allergen.garlic", "Ail"),
    ("allergen.onion", "Oignons"),
];

const AR: Table = &[
    // Header
    ("header.menu", "القائمة"),
    ("header.hours", "ساعات العمل"),
    ("header.today", "اليوم"),
    ("header.closed", "مغلق"),
    // Search
    ("search.placeholder", "ابحث في القائمة..."),
    ("search.noResults", "لا توجد نتائج"),
    ("search.noResultsDesc", "جرب كلمة بحث مختلفة"),
    ("search.clear", "مسح البحث"),
    // Categories
    ("category.all", "الكل"),
    // Tags
    ("tag.popular", "مشهور"),
    ("tag.bestseller", "الأكثر مبيعاً"),
    ("tag.spicy", "حار"),
    ("tag.vegetarian", "نباتي"),
    ("tag.new", "جديد"),
    ("tag.deal", "عرض"),
    ("tag.premium", "مميز"),
    // Actions
    ("action.viewDetails", "عرض التفاصيل"),
    ("action.close", "إغلاق"),
    // Currency
    ("currency.symbol", "د.ج"),
    ("currency.format", "{price} د.ج"),
    // Services
    ("service.takeaway", "للأخذ"),
    ("service.dine-in", "محلي"),
    // Misc
    ("misc.unavailable", "غير متوفر"),
    ("misc.openNow", "مفتوح الآن"),
    ("misc.closed", "مغلق"),
    // Allergen filter
    ("filter.allergens", "فلتر المواد المسببة للحساسية"),
    ("filter.hideAllergens", "إخفاء الأطباق التي تحتوي على:"),
    ("filter.clear", "مسح الفلاتر"),
    ("filter.active", "نشط"),
    // Allergens
    ("allergen.nuts", "مكسرات"),
    ("allergen.celery", "كرفس"),
    ("allergen.eggs", "بيض"),
    ("allergen.fish", "سمك"),
    ("allergen.soy", "صويا"),
    ("allergen.mustard", "خردل"),
    ("allergen.sulfites", "كبريتات"),
    ("allergen.peanuts", "فول سوداني"),
    ("allergen.gluten", "غلوتين"),
    ("allergen.crustaceans", "قشريات"),
    ("allergen.dairy", "حليب"),
    ("allergen.lupin", "ترمس"),
    ("allergen.mollusks", "رخويات"),
    ("allergen.sesame", "سمسم"),
    ("allergen.garlic", "ثوم"),
    ("allergen.onion", "بصل"),
];

fn table(language: Language) -> Table {
    match language {
        Language::En => EN,
        Language::Fr => FR,
        Language::Ar => AR,
    }
}

/// Message for `key` in exactly `language`, without fallback
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}
