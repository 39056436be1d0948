use crate::domain::model::{Category, Dish, MenuSet};

/// Menu shown before any generation succeeds.
pub fn default_menu() -> MenuSet {
    MenuSet {
        restaurant_name: "L'Harmonie".to_string(),
        tagline: "Гастрономическое Путешествие".to_string(),
        dishes: vec![
            Dish::new(1, "Тартар из Мраморной Говядины", "С трюфельным айоли, каперсами и чипсами из пармезана.", "850₽", Category::Starter),
            Dish::new(2, "Морские Гребешки", "Обжаренные на сливочном масле, с пюре из цветной капусты.", "1200₽", Category::Starter),
            Dish::new(3, "Стейк Рибай Прайм", "Зерновой откорм 200 дней, подается с перечным соусом.", "3500₽", Category::Special).highlighted(),
            Dish::new(4, "Утиная Грудка Магре", "С ягодным соусом и карамелизированной грушей.", "1450₽", Category::Main),
            Dish::new(5, "Лосось на Гриле", "Дикий лосось со спаржей и голландским соусом.", "1600₽", Category::Main),
            Dish::new(6, "Ризотто с Белыми Грибами", "Классический итальянский рецепт с маслом белого трюфеля.", "950₽", Category::Main),
            Dish::new(7, "Томленая Баранина", "Готовится 12 часов, подается с кускусом и мятой.", "1300₽", Category::Main),
            Dish::new(8, "Равиоли с Омаром", "Домашняя паста с нежным мясом омара в сливочном биске.", "1800₽", Category::Main),
            Dish::new(9, "Шоколадный Фондан", "Горячий кекс с жидким центром и ванильным мороженым.", "650₽", Category::Dessert),
            Dish::new(10, "Лимонный Тарт", "Французская классика с меренгой.", "550₽", Category::Dessert),
        ],
    }
}
