/// Label returned when an English tag is missing from the table. Lookup is
/// total: a miss never aborts a request.
pub const UNKNOWN_ENGLISH_LABEL: &str = "неизвестный тег";

/// Penn Treebank tag -> human-readable description.
pub fn english_label(tag: &str) -> &'static str {
    match tag {
        "CC" => "координирующая конъюнкция",
        "CD" => "цифра",
        "DT" => "артикль",
        "EX" => "указательное местоимение",
        "FW" => "иностранное слово",
        "IN" => "предлог/союз",
        "JJ" => "прилагательное",
        "JJR" => "прилагательное сравнительное",
        "JJS" => "прилагательное в превосходной степени",
        "LS" => "элемент списка",
        "MD" => "модальный глагол",
        "NN" => "существительное в единственном числе",
        "NNS" => "существительное во множественном числе",
        "NNP" => "имя собственное в единственном числе",
        "NNPS" => "имя собственное во множественном числе",
        "PDT" => "определительное местоимение",
        "POS" => "притяжательное окончание",
        "PRP" => "местоимение",
        "PRP$" => "притяжательное местоимение",
        "RB" => "наречие",
        "RBR" => "наречие в сравнительной степени",
        "RBS" => "наречие в превосходной степени",
        "RP" => "частица",
        "SYM" => "символ",
        "TO" => "предлог to",
        "UH" => "междометие",
        "VB" => "глагол, базовая форма",
        "VBD" => "глагол, прошедшее время",
        "VBG" => "глагол, герундий/причастие настоящего времени",
        "VBN" => "глагол, причастие прошедшего времени",
        "VBP" => "глагол, настоящее время, не 3-е лицо",
        "VBZ" => "глагол, настоящее время, 3-е лицо",
        "WDT" => "вопросительное определение",
        "WP" => "вопросительное местоимение",
        "WP$" => "притяжательное вопросительное местоимение",
        "WRB" => "вопросительное наречие",
        _ => UNKNOWN_ENGLISH_LABEL,
    }
}

/// Coarse UPOS class -> human-readable description. An unknown class yields
/// the empty label; the word is still reported with it.
pub fn french_label(tag: &str) -> &'static str {
    match tag {
        "ADJ" => "прилагательное",
        "ADP" => "предлог",
        "ADV" => "наречие",
        "AUX" => "вспомогательный глагол",
        "CCONJ" => "сочинительный союз",
        "DET" => "определитель",
        "INTJ" => "междометие",
        "NOUN" => "существительное",
        "NUM" => "числительное",
        "PART" => "частица",
        "PRON" => "местоимение",
        "PROPN" => "имя собственное",
        "PUNCT" => "пунктуация",
        "SCONJ" => "подчинительный союз",
        "SYM" => "символ",
        "VERB" => "глагол",
        "X" => "неизвестное или другое",
        _ => "",
    }
}
