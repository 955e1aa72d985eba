// Built-in catalog ruleset. Order inside INCLUSION_RULES is significant.
use crate::model::TagCode;

/// Matched against `name + " " + category`; any hit marks the row as a non-ingredient.
pub const EXCLUSION_KEYWORDS: &[&str] = &[
    "frozen meal", "frozen dinner", "frozen entree", "frozen pizza", "tv dinner",
    "microwave meal", "microwave popcorn", "heat and serve", "ready to eat", "ready-to-eat",
    "meal kit", "dinner kit", "lunch kit", "skillet meal", "hamburger helper",
    "tuna helper", "mac and cheese dinner", "boxed dinner", "potato chip", "tortilla chip",
    "corn chip", "pita chip", "cheese puff", "cheese curl", "veggie straw", "veggie chip",
    "rice cake", "popcorn", "pork rind", "pork skin", "pretzel bag", "snack pretzel",
    "snack mix", "snack bar", "granola bar", "cereal bar", "protein bar", "energy bar",
    "fruit snack", "fruit roll", "fruit leather", "fruit gummy", "gummy bear", "gummy worm",
    "gummy candy", "candy bar", "chocolate bar", "candy bag", "hard candy", "lollipop",
    "jawbreaker", "licorice", "taffy", "cotton candy", "soda", " cola", "ginger ale",
    "root beer", "cream soda", "energy drink", "sports drink", "electrolyte drink",
    "fruit juice", "orange juice", "apple juice", "grape juice", "cranberry juice",
    "pineapple juice", "tomato juice", "lemonade", "limeade", "fruit punch", "iced tea",
    "sweet tea", "kombucha", "coffee drink", "bottled coffee", "cold brew bottle",
    "frappuccino", "smoothie bottle", "juice smoothie", "drinkable yogurt", "protein shake",
    "meal replacement shake", "sparkling water", "mineral water", "bottled water",
    "distilled water", "flavored water", "vitamin water", "coconut water bottle", "beer ",
    " beer", "wine bottle", "spirits bottle", "whiskey bottle", "vodka bottle",
    "rum bottle", "gin bottle", "tequila bottle", "hard seltzer", "hard cider", "candy",
    "confection", "breath mint", "chewing gum", " gum ", "bubble gum", "breakfast cereal",
    "corn flakes", "frosted flakes", "fruit loops", "froot loops", "lucky charms",
    "cocoa puffs", "cap'n crunch", "cheerios", "wheaties", "grape nuts", "honey smacks",
    "rice krispies", "special k cereal", "raisin bran", "ice cream", "gelato", "sorbet",
    "sherbet", "frozen yogurt", "popsicle", "ice pop", "fudge bar", "ice cream bar",
    "ice cream sandwich", "drumstick cone", "klondike", "birthday cake", "wedding cake",
    "sheet cake", "cupcake", "donut", "doughnut", "muffin pack", "danish pastry",
    "croissant pack", "cinnamon roll pack", "brownie pack", "cookie pack",
    "cookie assortment", "pudding cup", "jello cup", "gelatin cup", "snack pudding",
    "vitamin c", "vitamin d", "vitamin e", "vitamin a", "vitamin b", "multivitamin",
    "supplement", "probiotic", "prebiotic", "fish oil capsule", "omega-3 capsule",
    "protein powder", "whey protein", "casein protein", "plant protein powder", "creatine",
    "bcaa", "pre-workout", "melatonin", "sleep aid", "fiber supplement", "metamucil",
    "ensure bottle", "boost bottle", "pediasure", "baby formula", "infant formula",
    "toddler formula", "baby food", "baby puree", "baby cereal", "gerber", "dog food",
    "cat food", "puppy food", "kitten food", "dog treat", "cat treat", "bird seed",
    "fish food", "pet food", "pet treat", "paper towel", "paper plate", "napkin pack",
    "plastic wrap", "aluminum foil", "zip bag", "storage bag", "freezer bag",
    "sandwich bag", "trash bag", "garbage bag", "dish soap", "laundry detergent",
    "cleaning spray", "bleach", "cutting board", "mixing bowl", "baking sheet",
    "baking pan", "cast iron pan", "skillet pan", "saute pan", "sauce pan", "dutch oven",
    "roasting pan", "muffin tin", "loaf pan", "measuring cup", "measuring spoon", "spatula",
    "whisk", "can opener", "vegetable peeler",
];

/// Matched against the category alone.
pub const EXCLUSION_CATEGORIES: &[&str] = &[
    "beverage", "drinks", "soda", "juice", "water", "snacks", "chips", "crackers",
    "popcorn", "candy", "confectionery", "gum", "ice cream", "frozen dessert",
    "frozen novelty", "frozen meals", "frozen entrees", "prepared meals",
    "breakfast cereal", "cereal", "supplement", "vitamins", "health supplement",
    "protein powder", "sports nutrition", "baby food", "baby formula", "infant", "pet food",
    "dog", "cat", "pet", "paper goods", "cleaning supplies", "household", "cookware",
    "bakeware", "kitchen tools", "personal care", "beauty", "cosmetic", "deli prepared",
    "deli meals",
];

pub const PRODUCE_KEYWORDS: &[&str] = &[
    "fresh vegetable", "fresh fruit", "organic vegetable", "organic fruit",
    "frozen vegetable", "frozen fruit", "broccoli", "cauliflower", "spinach", "kale",
    "arugula", "romaine", "iceberg lettuce", "butter lettuce", "mixed greens",
    "collard greens", "brussels sprout", "cabbage", "bok choy", "napa cabbage", "carrot",
    "celery", "cucumber", "zucchini", "squash", "bell pepper", "jalapeño", "serrano pepper",
    "habanero", "poblano", "anaheim pepper", "banana pepper", "cherry tomato",
    "grape tomato", "roma tomato", "red onion", "yellow onion", "white onion", "shallot",
    "scallion", "green onion", "leek", "garlic bulb", "garlic clove", "garlic head",
    "portobello", "shiitake", "cremini", "button mushroom", "oyster mushroom", "enoki",
    "chanterelle", "asparagus", "artichoke", "beet", "turnip", "parsnip", "sweet potato",
    "yam", "russet potato", "red potato", "yukon gold", "fingerling potato",
    "corn on the cob", "fresh corn", "green bean", "snap pea", "sugar snap", "snow pea",
    "eggplant", "okra", "fennel bulb", "radish", "jicama", "apple", "pear", "orange",
    "lemon", "lime", "grapefruit", "banana", "mango", "pineapple", "papaya", "kiwi",
    "strawberry", "blueberry", "raspberry", "blackberry", "watermelon", "cantaloupe",
    "honeydew", "peach", "nectarine", "plum", "apricot", "cherry", "avocado", "fig",
    "pomegranate", "passion fruit",
];

pub const FRESH_HERB_KEYWORDS: &[&str] = &[
    "fresh basil", "fresh parsley", "fresh cilantro", "fresh thyme", "fresh rosemary",
    "fresh mint", "fresh dill", "fresh chives", "fresh tarragon", "fresh oregano",
    "fresh sage", "fresh lemongrass", "fresh ginger root", "fresh turmeric root",
    "herb bunch", "herb packet",
];

pub const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken breast", "chicken thigh", "chicken wing", "chicken leg", "chicken tender",
    "whole chicken", "chicken drumstick", "ground chicken", "ground turkey",
    "turkey breast", "whole turkey", "ground beef", "beef chuck", "beef brisket",
    "beef rib", "flank steak", "skirt steak", "ribeye", "sirloin", "tenderloin",
    "beef roast", "beef stew meat", "beef short rib", "pork chop", "pork loin",
    "pork belly", "pork shoulder", "pork tenderloin", "baby back rib", "pork rib",
    "spare rib", "ham steak", "uncured ham", "spiral ham", "lamb chop", "lamb leg",
    "ground lamb", "rack of lamb", "salmon fillet", "salmon steak", "whole salmon",
    "tuna steak", "tuna fillet", "tilapia", "cod fillet", "halibut", "mahi mahi",
    "sea bass", "snapper", "trout", "catfish", "shrimp", "scallop", "lobster tail",
    "crab leg", "crab meat", "clam", "mussel", "oyster", "squid", "octopus", "bacon",
    "pancetta", "prosciutto", "salami", "pepperoni", "chorizo", "andouille", "bratwurst",
    "italian sausage", "breakfast sausage", "sausage link", "sausage patty", "deli turkey",
    "deli ham", "deli roast beef", "deli chicken", "lunch meat", "deli meat", "sliced meat",
    "tofu", "extra firm tofu", "silken tofu", "firm tofu", "tempeh", "seitan",
    "textured vegetable protein", "edamame", "black bean", "pinto bean", "kidney bean",
    "chickpea", "lentil", "split pea", "navy bean", "great northern bean",
    "cannellini bean", "fava bean", "dozen eggs", "large eggs", "medium eggs",
    "free range egg", "cage free egg", "organic egg", "egg whites", "liquid egg",
];

pub const DAIRY_KEYWORDS: &[&str] = &[
    "whole milk", "skim milk", "2% milk", "1% milk", "nonfat milk", "reduced fat milk",
    "lactose free milk", "organic milk", "buttermilk", "evaporated milk", "condensed milk",
    "dry milk", "powdered milk", "heavy cream", "heavy whipping cream", "whipping cream",
    "half and half", "light cream", "sour cream", "creme fraiche", "cream cheese",
    "neufchatel", "mascarpone", "ricotta", "cottage cheese", "farmers cheese",
    "fresh mozzarella", "burrata", "cheddar cheese", "cheddar block", "shredded cheddar",
    "parmesan", "parmigiano", "romano cheese", "asiago", "gruyere", "emmental",
    "swiss cheese", "gouda", "edam", "havarti", "fontina", "provolone", "brie", "camembert",
    "gorgonzola", "roquefort", "stilton", "blue cheese", "feta cheese", "queso fresco",
    "queso blanco", "monterey jack", "colby", "pepper jack", "butter stick",
    "unsalted butter", "salted butter", "european butter", "ghee jar", "clarified butter",
    "greek yogurt", "plain yogurt", "whole milk yogurt", "nonfat yogurt", "skyr", "kefir",
    "whipped cream can",
];

pub const GRAIN_KEYWORDS: &[&str] = &[
    "all purpose flour", "bread flour", "whole wheat flour", "cake flour", "pastry flour",
    "self rising flour", "almond flour", "coconut flour", "oat flour", "rye flour",
    "spelt flour", "cassava flour", "chickpea flour", "rice flour", "white rice",
    "brown rice", "jasmine rice", "basmati rice", "arborio rice", "wild rice",
    "instant rice", "spaghetti", "penne", "rigatoni", "fusilli", "rotini", "farfalle",
    "linguine", "fettuccine", "tagliatelle", "angel hair", "orzo", "macaroni",
    "lasagna noodle", "egg noodle", "ramen noodle", "soba noodle", "udon noodle",
    "rice noodle", "vermicelli noodle", "glass noodle", "rolled oat", "quick oat",
    "steel cut oat", "instant oat", "cornmeal", "polenta", "grits", "semolina",
    "breadcrumb", "panko", "plain breadcrumb", "italian breadcrumb", "bread loaf",
    "sandwich bread", "whole wheat bread", "white bread", "sourdough bread", "french bread",
    "baguette", "ciabatta", "pita bread", "naan", "flatbread", "flour tortilla",
    "corn tortilla", "quinoa", "farro", "bulgur", "couscous", "barley", "millet",
    "amaranth", "teff", "freekeh", "crouton", "stuffing mix",
];

pub const BAKING_KEYWORDS: &[&str] = &[
    "baking soda", "baking powder", "cream of tartar", "active dry yeast", "instant yeast",
    "rapid rise yeast", "vanilla extract", "almond extract", "peppermint extract",
    "lemon extract", "orange extract", "food coloring", "gel food color", "cocoa powder",
    "dutch process cocoa", "unsweetened cocoa", "chocolate chip", "mini chocolate chip",
    "white chocolate chip", "dark chocolate chip", "baking chocolate",
    "unsweetened chocolate", "bittersweet chocolate", "semisweet chocolate", "sprinkle",
    "nonpareil", "decorating sugar", "sanding sugar", "cake mix", "brownie mix",
    "cookie mix", "muffin mix", "pancake mix", "waffle mix", "biscuit mix",
    "powdered sugar", "confectioners sugar", "icing sugar", "granulated sugar",
    "cane sugar", "brown sugar", "dark brown sugar", "light brown sugar", "turbinado sugar",
    "raw sugar", "demerara sugar", "corn syrup", "light corn syrup", "dark corn syrup",
    "molasses",
];

pub const SPICE_KEYWORDS: &[&str] = &[
    "black pepper", "white pepper", "peppercorn", "sea salt", "kosher salt", "table salt",
    "himalayan salt", "fleur de sel", "smoked salt", "celery salt", "garlic salt",
    "garlic powder", "onion powder", "cumin", "ground cumin", "cumin seed", "paprika",
    "smoked paprika", "sweet paprika", "hot paprika", "chili powder", "ancho chili",
    "chipotle powder", "cayenne", "red pepper flake", "crushed red pepper", "cinnamon",
    "ground cinnamon", "cinnamon stick", "nutmeg", "ground nutmeg", "oregano",
    "dried oregano", "thyme", "dried thyme", "rosemary", "dried rosemary", "basil",
    "dried basil", "bay leaf", "turmeric", "ground turmeric", "coriander",
    "ground coriander", "fennel seed", "caraway seed", "cardamom", "clove", "allspice",
    "ginger", "ground ginger", "mustard seed", "ground mustard", "fenugreek",
    "nigella seed", "sumac", "za'atar", "herbs de provence", "italian seasoning", "old bay",
    "cajun seasoning", "creole seasoning", "taco seasoning", "fajita seasoning",
    "ranch seasoning", "curry powder", "garam masala", "ras el hanout", "five spice",
    "everything bagel seasoning", "lemon pepper", "steak seasoning", "bbq rub", "dry rub",
    "vanilla bean", "saffron", "annatto", "achiote", "dill weed", "dried dill", "marjoram",
    "dried sage",
];

pub const OIL_FAT_KEYWORDS: &[&str] = &[
    "olive oil", "extra virgin olive oil", "vegetable oil", "canola oil", "sunflower oil",
    "safflower oil", "corn oil", "soybean oil", "peanut oil", "grapeseed oil",
    "avocado oil", "coconut oil", "palm oil", "sesame oil", "toasted sesame oil",
    "walnut oil", "flaxseed oil", "truffle oil", "cooking spray", "nonstick spray",
    "baking spray", "shortening", "vegetable shortening", "crisco", "lard", "rendered lard",
    "duck fat", "beef tallow", "margarine stick", "vegan butter",
];

pub const CONDIMENT_KEYWORDS: &[&str] = &[
    "soy sauce", "tamari", "liquid aminos", "coconut aminos", "fish sauce", "oyster sauce",
    "hoisin sauce", "worcestershire sauce", "hot sauce", "sriracha", "tabasco", "cholula",
    "chili garlic sauce", "sambal oelek", "gochujang", "apple cider vinegar",
    "white vinegar", "distilled vinegar", "red wine vinegar", "white wine vinegar",
    "balsamic vinegar", "sherry vinegar", "rice vinegar", "malt vinegar", "dijon mustard",
    "whole grain mustard", "yellow mustard", "ketchup", "mayonnaise", "light mayonnaise",
    "relish", "sweet relish", "dill relish", "bbq sauce", "barbecue sauce", "steak sauce",
    "buffalo sauce", "wing sauce", "teriyaki sauce", "ponzu sauce", "sweet chili sauce",
    "pad thai sauce", "stir fry sauce", "tahini", "miso paste", "red miso", "white miso",
    "tomato paste", "marinara sauce", "pasta sauce", "alfredo sauce", "pesto sauce",
    "enchilada sauce", "salsa verde", "mole sauce", "salsa jar", "chunky salsa", "pickle",
    "dill pickle", "bread and butter pickle", "pickled jalapeno", "giardiniera", "capers",
    "anchovy paste", "anchovy fillet", "sun dried tomato", "roasted red pepper",
    "horseradish prepared", "wasabi paste",
];

pub const CANNED_GOOD_KEYWORDS: &[&str] = &[
    "canned tomato", "diced tomato", "crushed tomato", "stewed tomato",
    "whole peeled tomato", "san marzano", "fire roasted tomato", "canned bean",
    "canned black bean", "canned chickpea", "canned kidney bean", "canned pinto bean",
    "canned navy bean", "canned lentil", "canned white bean", "canned cannellini",
    "canned corn", "canned pumpkin", "canned yam", "canned artichoke", "canned beet",
    "canned mushroom", "canned water chestnut", "canned bamboo", "canned green bean",
    "canned pea", "canned spinach", "coconut milk can", "coconut cream can",
    "lite coconut milk", "chicken broth", "beef broth", "vegetable broth", "chicken stock",
    "beef stock", "bone broth", "canned tuna", "canned salmon", "canned sardine",
    "canned anchovy", "canned crab", "canned clam", "rotel", "green chili can",
    "chipotle in adobo",
];

pub const SWEETENER_KEYWORDS: &[&str] = &[
    "honey", "raw honey", "manuka honey", "clover honey", "maple syrup", "pure maple syrup",
    "agave", "agave nectar", "date syrup", "date sugar", "stevia", "monk fruit sweetener",
    "erythritol", "brown rice syrup",
];

pub const NUT_SEED_KEYWORDS: &[&str] = &[
    "almonds", "raw almonds", "roasted almonds", "sliced almonds", "slivered almonds",
    "almond meal", "walnuts", "walnut halves", "pecans", "cashews", "pistachios",
    "pine nuts", "hazelnuts", "macadamia nut", "brazil nut", "peanut", "raw peanut",
    "roasted peanut", "peanut butter", "almond butter", "cashew butter", "sunflower seed",
    "pumpkin seed", "pepita", "sesame seed", "chia seed", "flaxseed", "ground flax",
    "hemp seed", "poppy seed",
];

pub const THICKENER_KEYWORDS: &[&str] = &[
    "cornstarch", "corn starch", "arrowroot", "arrowroot powder", "tapioca starch",
    "tapioca pearl", "potato starch", "unflavored gelatin", "agar agar", "agar powder",
    "xanthan gum", "guar gum", "pectin",
];

pub const ALCOHOL_KEYWORDS: &[&str] = &[
    "cooking wine", "dry sherry", "mirin", "sake cooking", "rice wine", "shaoxing wine",
];

pub const OTHER_INGR_KEYWORDS: &[&str] = &[
    "nutritional yeast", "dried mushroom", "porcini dried", "seaweed", "nori sheet",
    "kombu", "wakame", "dashi", "bonito flake", "matcha powder", "rose water",
    "orange blossom water", "liquid smoke", "raisin", "currant", "sultana",
    "dried cranberry", "dried cherry", "dried apricot", "dried fig", "dried date",
    "dried mango", "dried blueberry", "dried tomato", "canned fruit", "canned peach",
    "canned pear", "canned pineapple", "maraschino cherry", "lemon juice bottle",
    "lime juice bottle", "jam", "jelly", "preserves", "fruit spread", "marmalade",
    "chutney", "caramel sauce", "caramel topping", "sweetened condensed milk",
    "cream of mushroom soup", "cream of chicken soup", "french onion soup can", "harissa",
    "curry paste", "red curry paste", "green curry paste", "yellow curry paste",
    "massaman paste", "coconut butter", "cacao nib", "carob powder", "vital wheat gluten",
    "citric acid", "meat tenderizer", "vinegar",
];

/// First group with a hit wins.
pub const INCLUSION_RULES: &[(&[&str], TagCode)] = &[
    (PRODUCE_KEYWORDS, TagCode::Produce),
    (FRESH_HERB_KEYWORDS, TagCode::FreshHerb),
    (PROTEIN_KEYWORDS, TagCode::Protein),
    (DAIRY_KEYWORDS, TagCode::Dairy),
    (GRAIN_KEYWORDS, TagCode::Grain),
    (BAKING_KEYWORDS, TagCode::Baking),
    (SPICE_KEYWORDS, TagCode::Spice),
    (OIL_FAT_KEYWORDS, TagCode::OilFat),
    (CONDIMENT_KEYWORDS, TagCode::Condiment),
    (CANNED_GOOD_KEYWORDS, TagCode::CannedGood),
    (SWEETENER_KEYWORDS, TagCode::Sweetener),
    (NUT_SEED_KEYWORDS, TagCode::NutSeed),
    (THICKENER_KEYWORDS, TagCode::Thickener),
    (ALCOHOL_KEYWORDS, TagCode::Alcohol),
    (OTHER_INGR_KEYWORDS, TagCode::OtherIngr),
];

/// Category heuristic: a category containing any of these looks like groceries.
/// `cereal grain` must not be confused with the excluded `cereal` category.
pub const FOOD_CATEGORY_KEYWORDS: &[&str] = &[
    "food", "grocery", "groceries", "pantry", "cooking", "baking", "ingredient", "produce",
    "meat", "seafood", "poultry", "dairy", "deli", "bakery", "spice", "herb", "condiment",
    "sauce", "oil", "flour", "grain", "pasta", "rice", "canned", "jarred", "dry good",
    "bulk", "organic", "natural food", "gourmet", "specialty food", "international food",
    "ethnic food", "asian food", "mexican food", "italian food", "middle eastern",
    "latin food", "frozen food", "refrigerated", "chilled", "nut", "seed", "nut butter",
    "sweetener", "sugar", "honey", "vinegar", "dressing", "marinade", "seasoning", "rub",
    "blend", "broth", "stock", "soup base", "cheese", "butter", "egg", "milk", "cream",
    "yogurt", "bread", "tortilla", "wrap", "breakfast", "cereal grain",
];
