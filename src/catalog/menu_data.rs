//! The built-in menu.

use crate::model::{AddonOption, Dietary, IngredientOption, MenuItem, SizeOption};

struct Seed {
    id: &'static str,
    name: &'static str,
    price: f64,
    image: &'static str,
    restaurant: &'static str,
    category: &'static str,
    rating: f64,
    rating_count: &'static str,
    calories: u32,
    time: u32,
    description: &'static str,
    // vegetarian, vegan, gluten free, halal, spicy
    dietary: [bool; 5],
}

impl Seed {
    fn build(self) -> MenuItem {
        let [vegetarian, vegan, gluten_free, halal, spicy] = self.dietary;
        MenuItem {
            id: self.id.to_string(),
            name: self.name.to_string(),
            price: self.price,
            image: self.image.to_string(),
            restaurant: self.restaurant.to_string(),
            category: self.category.to_string(),
            rating: Some(self.rating),
            rating_count: Some(self.rating_count.to_string()),
            calories: self.calories,
            time: self.time,
            description: Some(self.description.to_string()),
            dietary: Dietary {
                vegetarian,
                vegan,
                gluten_free,
                halal,
                spicy,
            },
            sizes: None,
            ingredients: None,
            addons: None,
        }
    }
}

fn size(id: &str, name: &str, price: f64) -> SizeOption {
    SizeOption {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

fn ingredient(id: &str, name: &str, price: f64) -> IngredientOption {
    IngredientOption {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

fn addon(id: &str, name: &str, weight: &str, price: f64) -> AddonOption {
    AddonOption {
        id: id.to_string(),
        name: name.to_string(),
        weight: weight.to_string(),
        price,
    }
}

pub(crate) fn builtin_menu() -> Vec<MenuItem> {
    let mut jollof = Seed {
        id: "jollof-rice",
        name: "Classic Jollof Rice",
        price: 12.99,
        image: "/images/foods/jollof-rice.jpg",
        restaurant: "African Delights",
        category: "Main Dishes",
        rating: 4.8,
        rating_count: "1.2k",
        calories: 450,
        time: 25,
        description: "Traditional West African rice dish cooked in rich tomato sauce with aromatic spices.",
        dietary: [true, true, true, true, true],
    }
    .build();
    jollof.sizes = Some(vec![
        size("small", "Small", 12.99),
        size("medium", "Medium", 15.99),
        size("large", "Large", 18.99),
    ]);
    jollof.ingredients = Some(vec![
        ingredient("chicken", "Chicken", 3.99),
        ingredient("beef", "Beef", 4.99),
        ingredient("fish", "Fish", 5.99),
    ]);
    jollof.addons = Some(vec![
        addon("plantain", "Fried Plantain", "150g", 2.99),
        addon("moin-moin", "Moin Moin", "200g", 3.99),
        addon("coleslaw", "Coleslaw", "100g", 1.99),
    ]);

    let rest = [
        Seed {
            id: "chicken-shawarma",
            name: "Chicken Shawarma",
            price: 9.99,
            image: "/images/foods/shawarma.jpg",
            restaurant: "Mediterranean Grill",
            category: "Quick Bites",
            rating: 4.6,
            rating_count: "856",
            calories: 520,
            time: 15,
            description: "Grilled marinated chicken wrapped in pita with garlic sauce and fresh vegetables.",
            dietary: [false, false, false, true, false],
        },
        Seed {
            id: "egusi-soup",
            name: "Egusi Soup",
            price: 15.99,
            image: "/images/foods/egusi-soup.jpg",
            restaurant: "African Delights",
            category: "Soups",
            rating: 4.7,
            rating_count: "543",
            calories: 380,
            time: 35,
            description: "Rich Nigerian soup made with ground melon seeds, leafy vegetables, and assorted meat.",
            dietary: [false, false, true, true, true],
        },
        Seed {
            id: "pepperoni-pizza",
            name: "Classic Pepperoni Pizza",
            price: 18.99,
            image: "/images/foods/pepperoni-pizza.jpg",
            restaurant: "Pizza Paradise",
            category: "Main Dishes",
            rating: 4.5,
            rating_count: "2.1k",
            calories: 850,
            time: 20,
            description: "Hand-tossed pizza topped with pepperoni, mozzarella, and our signature tomato sauce.",
            dietary: [false, false, false, false, false],
        },
        Seed {
            id: "grilled-chicken",
            name: "Herb Grilled Chicken",
            price: 16.99,
            image: "/images/foods/grilled-chicken.jpg",
            restaurant: "Grill Master",
            category: "Grills",
            rating: 4.4,
            rating_count: "768",
            calories: 320,
            time: 30,
            description: "Tender chicken breast marinated in herbs and grilled to perfection.",
            dietary: [false, false, true, true, false],
        },
        Seed {
            id: "caesar-salad",
            name: "Classic Caesar Salad",
            price: 8.99,
            image: "/images/foods/caesar-salad.jpg",
            restaurant: "Fresh & Green",
            category: "Sides",
            rating: 4.3,
            rating_count: "432",
            calories: 220,
            time: 10,
            description: "Crisp romaine lettuce, parmesan cheese, croutons, and Caesar dressing.",
            dietary: [true, false, false, true, false],
        },
        Seed {
            id: "suya",
            name: "Spicy Beef Suya",
            price: 13.99,
            image: "/images/foods/suya.jpg",
            restaurant: "African Delights",
            category: "Grills",
            rating: 4.9,
            rating_count: "678",
            calories: 410,
            time: 20,
            description: "Nigerian style spiced and grilled beef skewers.",
            dietary: [false, false, true, true, true],
        },
        Seed {
            id: "spring-rolls",
            name: "Vegetable Spring Rolls",
            price: 6.99,
            image: "/images/foods/spring-rolls.jpg",
            restaurant: "Asian Fusion",
            category: "Appetizers",
            rating: 4.2,
            rating_count: "345",
            calories: 180,
            time: 15,
            description: "Crispy rolls filled with fresh vegetables and served with sweet chili sauce.",
            dietary: [true, true, false, true, false],
        },
        Seed {
            id: "fish-pepper-soup",
            name: "Catfish Pepper Soup",
            price: 17.99,
            image: "/images/foods/fish-pepper-soup.jpg",
            restaurant: "African Delights",
            category: "Soups",
            rating: 4.7,
            rating_count: "432",
            calories: 290,
            time: 30,
            description: "Spicy Nigerian soup made with fresh catfish and aromatic spices.",
            dietary: [false, false, true, true, true],
        },
        Seed {
            id: "margherita-pizza",
            name: "Margherita Pizza",
            price: 16.99,
            image: "/images/foods/margherita-pizza.jpg",
            restaurant: "Pizza Paradise",
            category: "Main Dishes",
            rating: 4.6,
            rating_count: "1.5k",
            calories: 780,
            time: 20,
            description: "Classic pizza with fresh mozzarella, tomatoes, and basil.",
            dietary: [true, false, false, true, false],
        },
    ];

    std::iter::once(jollof)
        .chain(rest.into_iter().map(Seed::build))
        .collect()
}
