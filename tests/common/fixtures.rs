/// A deck blueprint exercising every component kind, template chains
/// and a palette branch.
///
/// The `hero` card uses all drawing commands; the `plain` card hides an
/// inherited component. Component names are zero-padded so lexical
/// order matches the intended stacking order.
pub const DECK: &str = r#"<data>
    <deck>
        <hero>
            <command01_image>
                <type>image</type>
                <name>Hero</name>
                <next>templates frame size</next>
            </command01_image>
            <command02_background>
                <type>monochrome</type>
                <color>#204060</color>
                <next>templates frame background</next>
            </command02_background>
            <command03_symbols_load>
                <type>import_layer_load</type>
                <filename>Symbols.xcf</filename>
                <name>symbols</name>
            </command03_symbols_load>
            <command04_symbol>
                <type>import_layer</type>
                <targetFile>symbols</targetFile>
                <targetLayer>sword</targetLayer>
                <position parse="tuple">40, 60</position>
            </command04_symbol>
            <command05_group>
                <type>group</type>
                <name>Icons</name>
                <addToPosition parse="int">-1</addToPosition>
            </command05_group>
            <command06_title>
                <type>text</type>
                <text>Hero</text>
                <next>templates style title</next>
            </command06_title>
            <command07_select>
                <type>select</type>
                <size parse="tuple">360, 80</size>
                <position parse="tuple">20, 480</position>
            </command07_select>
            <command08_mask>
                <type>mask</type>
                <layer>Background</layer>
            </command08_mask>
        </hero>
        <plain>
            <command01_image>
                <type>image</type>
                <size parse="tuple">400,600</size>
            </command01_image>
            <command02_background>
                <type>hide</type>
                <next>templates frame background</next>
            </command02_background>
        </plain>
    </deck>
    <templates>
        <frame>
            <size>
                <size parse="tuple">400,600</size>
            </size>
            <background>
                <type>monochrome</type>
                <name>Background</name>
                <size parse="tuple">400,600</size>
                <color>#000000</color>
                <addToPosition parse="int">0</addToPosition>
            </background>
        </frame>
        <style>
            <title>
                <type>text</type>
                <font>Sans Bold</font>
                <fontSize parse="int">32</fontSize>
                <justification parse="int">2</justification>
                <color>#f0e6d2</color>
            </title>
        </style>
        <colors>
            <color>#ffffff</color>
            <front>
                <color>#204060</color>
                <border>
                    <color>#101010</color>
                </border>
            </front>
            <back>
                <color>#402010</color>
            </back>
        </colors>
    </templates>
</data>"#;
