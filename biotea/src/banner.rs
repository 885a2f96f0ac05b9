pub const TEA_LOGO: &str = r"
        (  )   (   )  )
         ) (   )  (  (
         ( )  (    ) )
         _____________
        <_____________> ___
        |             |/ _ \
        |   bioTEA    | | | |
        |             |_| |_|
     ___|             |\___/
    /    \___________/    \
    \_____________________/
";

pub const WIZARD_LOGO: &str = r"
                   ____
                 .'* *.'
              __/_*_*(_
             / _______ \
            _\_)/___\(_/_
           / _((\- -/))_ \
           \ \())(-)(()/ /
            ' \(((()))/ '
           / ' \)).))/ ' \
          / _ \ - | - /_  \
         (   ( .;''';. .'  )
         _\ __ /    )\ __ /_
           \/  \   ' /  \/
            .'  '...' ' )
             / /  |  \ \
            / .   .   . \
           /   .     .   \
          /   /   |   \   \
        .'   /    b    '.  '.
    _.-'    /     Bb     '-. '-._
_.-'       |      BBb       '-.  '-.
(___________\____.dBBBb.________)____)
";
