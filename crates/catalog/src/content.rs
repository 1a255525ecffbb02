//! 内置内容：活动点子与对话问题

use crate::models::Category::{self, Active, Creative, Indoors, Outdoors, Quiet};

/// (标题, 分类, 年龄段)
pub(crate) const ACTIVITIES: &[(&str, Category, &[&str])] = &[
    ("Build a pillow fort in the living room.", Indoors, &["Preschool", "Kids", "Teens"]),
    ("Find 5 red things in the house.", Indoors, &["Toddler", "Preschool"]),
    ("Have an indoor picnic (on the floor!).", Indoors, &["Toddler", "Preschool", "Kids"]),
    ("Draw a map of your neighborhood.", Indoors, &["Kids", "Teens"]),
    ("Play 'I Spy' for 10 minutes.", Indoors, &["Toddler", "Preschool"]),
    ("Make shadow puppets on the wall.", Indoors, &["Preschool", "Kids"]),
    ("Play 'I Spy' with things in the room.", Indoors, &["Toddler", "Preschool"]),
    ("Have a 'Floor is Lava' game across the living room.", Active, &["Preschool", "Kids", "Teens"]),
    ("Make paper airplanes and have a flight contest.", Creative, &["Kids", "Tweens"]),
    ("Tell a story one sentence at a time, taking turns.", Creative, &["Preschool", "Kids", "Teens"]),
    ("See who can balance on one foot the longest.", Active, &["Preschool", "Kids", "Teens"]),
    ("Draw a portrait of each other without looking down.", Creative, &["Kids", "Teens"]),
    ("Invent a secret handshake.", Indoors, &["Kids", "Teens"]),
    ("Have a dance party to one favorite song.", Active, &["Toddler", "Preschool", "Kids", "Teens"]),
    ("Play 'Rock, Paper, Scissors' (best of 5).", Indoors, &["Preschool", "Kids", "Teens"]),
    ("Find 5 different types of leaves outside.", Outdoors, &["Preschool", "Kids"]),
    ("Lie on the grass and watch the clouds float by.", Outdoors, &["Preschool", "Kids", "Teens"]),
    ("Go on a 'listening walk' and name every sound you hear.", Outdoors, &["Preschool", "Kids"]),
    ("Stack pillows as high as they can go without falling.", Indoors, &["Toddler", "Preschool"]),
    ("Try to write your name with your non-dominant hand.", Creative, &["Kids", "Teens"]),
    ("Build a house of cards.", Quiet, &["Kids", "Teens"]),
    ("Pretend to be different animals and guess which one.", Active, &["Toddler", "Preschool"]),
    ("Draw a map of your bedroom from memory.", Creative, &["Kids", "Teens"]),
    ("Play the 'Quiet Game' for one minute.", Quiet, &["Preschool", "Kids"]),
    ("Find 5 things in the house smaller than your thumb.", Indoors, &["Toddler", "Preschool", "Kids"]),
    ("Play 'Simon Says'.", Active, &["Preschool", "Kids"]),
    ("Make up a silly poem together.", Creative, &["Preschool", "Kids"]),
    ("Practice making funny faces in a mirror.", Indoors, &["Toddler", "Preschool", "Kids"]),
    ("Create a 'band' using pots, pans, and spoons.", Active, &["Toddler", "Preschool", "Kids"]),
    ("Try to pat your head and rub your tummy at the same time.", Indoors, &["Kids", "Teens"]),
    ("Have a staring contest.", Quiet, &["Preschool", "Kids", "Teens"]),
    ("Draw a monster, taking turns adding one body part.", Creative, &["Preschool", "Kids"]),
    ("See who can make the best bird call.", Indoors, &["Preschool", "Kids", "Teens"]),
    ("Sing 'Head, Shoulders, Knees, and Toes' as fast as you can.", Active, &["Toddler", "Preschool"]),
    ("Count all the windows in your home.", Indoors, &["Preschool", "Kids"]),
    ("Find a bug outside and give it a name.", Outdoors, &["Preschool", "Kids"]),
    ("Create a museum of 5 interesting household objects.", Creative, &["Preschool", "Kids"]),
    ("Read one short book out loud with funny voices.", Quiet, &["Toddler", "Preschool", "Kids"]),
    ("Learn to fold a simple origami animal.", Creative, &["Kids", "Teens"]),
    ("Give a 2-minute 'tour' of the house.", Indoors, &["Preschool", "Kids"]),
    ("Make up a new, silly word and define it.", Creative, &["Kids", "Teens"]),
    ("Do 10 jumping jacks together.", Active, &["Preschool", "Kids", "Teens"]),
    ("Trace your hands on a piece of paper.", Creative, &["Toddler", "Preschool"]),
    ("Whisper a secret and pass it on.", Quiet, &["Preschool", "Kids"]),
    ("Make a list of 10 things you're grateful for.", Quiet, &["Kids", "Teens"]),
    ("Race two leaves down a stream or puddle.", Outdoors, &["Preschool", "Kids"]),
    ("Draw your favorite animal with chalk on the sidewalk.", Outdoors, &["Preschool", "Kids", "Teens"]),
    ("Try to guess a song by just humming the tune.", Indoors, &["Kids", "Teens"]),
    ("Have a thumb war tournament.", Active, &["Kids", "Teens"]),
    ("See how many rhymes you can make for the word 'cat'.", Creative, &["Preschool", "Kids"]),
    ("Build a 'nest' out of couch cushions.", Creative, &["Toddler", "Preschool", "Kids"]),
    ("Try to touch your toes (or knees, or shins!).", Active, &["Preschool", "Kids"]),
    ("Listen to a song and draw whatever it makes you think of.", Creative, &["Preschool", "Kids", "Teens"]),
    ("Write a secret code message for someone to find.", Creative, &["Kids", "Teens"]),
    ("Find a cool rock, bring it inside, and name it.", Outdoors, &["Toddler", "Preschool", "Kids"]),
];

pub(crate) const QUESTIONS: &[&str] = &[
    "If you could have any superpower, what would it be and why?",
    "What was the funniest thing that happened today?",
    "If our pet could talk, what would it say?",
    "What's one thing you want to do this weekend?",
    "What new thing did you learn today?",
    "If you could invent a new holiday, what would it celebrate?",
    "What's the best smell in the world?",
    "If you could be any animal for a day, which one would you choose?",
    "What makes you feel really happy?",
    "If you could travel anywhere in the world right now, where would you go?",
    "What's your favorite sound?",
    "If you could have dinner with any cartoon character, who would it be?",
    "What's something you're really good at?",
    "If you could make one rule that everyone in the world had to follow, what would it be?",
    "What's the silliest dream you've ever had?",
    "If you could change your name, what would you change it to?",
    "What's your favorite thing about winter?",
    "If you found a treasure chest, what would you hope is inside?",
    "What's something that always makes you laugh?",
    "If you could design a new playground, what would it have?",
    "What's the kindest thing someone did for you today (or this week)?",
    "If you could talk to trees, what would you ask them?",
    "What's your favorite game to play?",
    "If you could shrink down to the size of an ant, what would you do?",
    "What's something you wish you could do better?",
    "If you could build a robot, what would you want it to do?",
    "What's your favorite memory from when you were little?",
    "If you could give everyone in the world one gift, what would it be?",
    "What's the most interesting thing you saw today?",
    "If you could live in a book or movie, which one would it be?",
    "What are you most looking forward to tomorrow?",
    "If you could fly, where would you go first?",
    "What's something brave you did recently?",
    "If you could have any magical creature as a pet, what would you choose?",
    "What song always makes you want to dance?",
];
